//! Built-in named formats.
//!
//! Callers may configure a number format either with a raw pattern or with
//! one of the named formats below, optionally with a precision. Named formats
//! resolve to fixed LDML patterns:
//!
//! | Format | Pattern | With precision 2 |
//! |--------|---------|------------------|
//! | `fixedpoint` | `#,##0` | `#,##0.00` |
//! | `percent` | `#,##0%` | `#,##0.00%` |
//! | `currency` | `$#,##0;$-#,##0` | `$#,##0.00;$-#,##0.00` |
//!
//! Locale data often spells the percent format `#,###,##0%`. Its repeated
//! group of three formats identically to `#,##0%`, which is also the form
//! [`get_format`](crate::get_format) recovers, so the shorter one is used.
//!
//! ## Examples
//!
//! ```rust
//! use ldml_number::{FormatKind, FormatSource, NamedFormat};
//!
//! let source = FormatSource::Named(NamedFormat::new(FormatKind::Currency).with_precision(2));
//! assert_eq!(source.to_pattern(), "$#,##0.00;$-#,##0.00");
//!
//! let source: FormatSource = serde_json::from_str(r#"{"type":"percent"}"#).unwrap();
//! assert_eq!(source.to_pattern(), "#,##0%");
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The built-in format families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    FixedPoint,
    Percent,
    Currency,
}

impl FormatKind {
    /// Pattern pieces; the fraction digits are inserted between them.
    const fn template(self) -> &'static [&'static str] {
        match self {
            FormatKind::FixedPoint => &["#,##0", ""],
            FormatKind::Percent => &["#,##0", "%"],
            FormatKind::Currency => &["$#,##0", ";$-#,##0", ""],
        }
    }
}

/// A named format with an optional number of fraction digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedFormat {
    #[serde(rename = "type")]
    pub kind: FormatKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl NamedFormat {
    #[must_use]
    pub fn new(kind: FormatKind) -> Self {
        NamedFormat {
            kind,
            precision: None,
        }
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Resolves the format to its LDML pattern.
    pub fn to_pattern(&self) -> String {
        let fraction = match self.precision {
            Some(digits) if digits > 0 => format!(".{}", "0".repeat(digits)),
            _ => String::new(),
        };
        self.kind.template().join(&fraction)
    }
}

/// Where a number format comes from: a raw pattern or a named format.
///
/// Deserializes from either a bare string (`"#,##0.00"` or `"currency"`) or
/// an object (`{"type": "currency", "precision": 2}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatSource {
    Named(NamedFormat),
    Pattern(String),
}

impl FormatSource {
    /// Resolves to pattern text. Bare strings naming a built-in format are
    /// treated as that format.
    pub fn to_pattern(&self) -> Cow<'_, str> {
        match self {
            FormatSource::Named(named) => Cow::Owned(named.to_pattern()),
            FormatSource::Pattern(pattern) => match kind_from_name(pattern) {
                Some(kind) => Cow::Owned(NamedFormat::new(kind).to_pattern()),
                None => Cow::Borrowed(pattern),
            },
        }
    }
}

impl From<&str> for FormatSource {
    fn from(pattern: &str) -> Self {
        FormatSource::Pattern(pattern.to_string())
    }
}

impl From<NamedFormat> for FormatSource {
    fn from(named: NamedFormat) -> Self {
        FormatSource::Named(named)
    }
}

fn kind_from_name(name: &str) -> Option<FormatKind> {
    match name {
        "fixedpoint" => Some(FormatKind::FixedPoint),
        "percent" => Some(FormatKind::Percent),
        "currency" => Some(FormatKind::Currency),
        _ => None,
    }
}

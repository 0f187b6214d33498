//! Number formatting.
//!
//! [`NumberFormatter`] renders an `f64` according to a compiled
//! [`PatternSpec`]:
//!
//! - **Sign**: negative values (including `-0.0`) use the negative section, or
//!   the positive one behind a `-` when the pattern has no `;`
//! - **Percent**: the value is scaled by 100 on its exact decimal digits
//! - **Rounding**: half away from zero at the widest fraction the pattern allows
//! - **Integer width**: padded with zeros to the required width, and truncated
//!   to it when the pattern has no `#` before the decimal point
//! - **Grouping**: separators inserted right to left, the last group size repeats
//!
//! ## Examples
//!
//! ```rust
//! use ldml_number::{get_formatter, Separators};
//!
//! let formatter = get_formatter("#,##0.00;(#,##0.00)", Separators::default()).unwrap();
//! assert_eq!(formatter.format(1234.5), "1,234.50");
//! assert_eq!(formatter.format(-0.125), "(0.13)");
//! assert_eq!(formatter.format(f64::NAN), "");
//! ```

use crate::decimal::DecimalDigits;
use crate::pattern::DigitSpec;
use crate::{PatternSpec, Separators};
use std::sync::Arc;

/// Significant digits an `f64` can carry reliably. Fraction digits beyond
/// this budget are never emitted.
pub const MAX_SIGNIFICANT_DIGITS: usize = 15;

/// A compiled `f64 -> String` formatting function.
///
/// Cheap to clone and safe to share between threads.
#[derive(Clone, Debug)]
pub struct NumberFormatter {
    spec: Arc<PatternSpec>,
    separators: Separators,
}

impl NumberFormatter {
    pub fn new(spec: PatternSpec, separators: Separators) -> Self {
        Self::from_shared(Arc::new(spec), separators)
    }

    pub fn from_shared(spec: Arc<PatternSpec>, separators: Separators) -> Self {
        NumberFormatter { spec, separators }
    }

    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    pub fn separators(&self) -> Separators {
        self.separators
    }

    /// Formats an optional value; an absent value formats to the empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ldml_number::{get_formatter, Separators};
    ///
    /// let formatter = get_formatter("000", Separators::default()).unwrap();
    /// assert_eq!(formatter.format_opt(None), "");
    /// assert_eq!(formatter.format_opt(Some(7.0)), "007");
    /// ```
    pub fn format_opt(&self, value: Option<f64>) -> String {
        value.map(|v| self.format(v)).unwrap_or_default()
    }

    /// Formats a value. `NaN` and infinities format to the empty string.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return String::new();
        }

        let negative = value.is_sign_negative();
        let section = self.spec.section(negative);
        let (prefix, suffix) = self.spec.affix_texts(negative);

        let mut digits = DecimalDigits::from_f64(value);
        if self.spec.is_percent {
            digits.shift_left(2);
        }

        let max_fraction = section
            .fraction
            .max_digits()
            .unwrap_or(section.fraction.required);
        let budget = MAX_SIGNIFICANT_DIGITS.saturating_sub(digits.integer().len());
        digits.round_half_away(max_fraction.min(budget));

        let integer = fit_integer(&digits.integer(), &section.integer);
        let integer = apply_groups(&integer, &section.group_sizes, self.separators.thousands);
        let fraction = format!(
            "{:0<width$}",
            digits.fraction(),
            width = section.fraction.required
        );

        let mut out =
            String::with_capacity(prefix.len() + integer.len() + fraction.len() + suffix.len() + 1);
        out.push_str(&prefix);
        out.push_str(&integer);
        if !fraction.is_empty() {
            out.push(self.separators.decimal);
            out.push_str(&fraction);
        }
        out.push_str(&suffix);
        out
    }
}

fn fit_integer(digits: &str, spec: &DigitSpec) -> String {
    let digits = if !spec.has_optional() && digits.len() > spec.required {
        &digits[digits.len() - spec.required..]
    } else {
        digits
    };
    format!(
        "{:0>width$}",
        digits.trim_start_matches('0'),
        width = spec.required
    )
}

fn apply_groups(digits: &str, group_sizes: &[usize], separator: char) -> String {
    let Some(&last_size) = group_sizes.last() else {
        return digits.to_string();
    };

    let mut groups = Vec::new();
    let mut rest = digits;
    let mut index = 0;
    while !rest.is_empty() {
        let size = group_sizes.get(index).copied().unwrap_or(last_size);
        let split = rest.len().saturating_sub(size);
        groups.push(&rest[split..]);
        rest = &rest[..split];
        index += 1;
    }
    groups.reverse();
    groups.join(&separator.to_string())
}

//! Number parsing.
//!
//! [`NumberParser`] is the inverse of [`NumberFormatter`](crate::NumberFormatter):
//! it accepts exactly the canonical shapes a pattern describes and returns
//! `None` for anything else. There is no best-effort result.
//!
//! ## Validation rules
//!
//! - **Sections**: text must carry the literal prefix and suffix of a section.
//!   When the pattern has an explicit negative section a bare `-` is *not*
//!   accepted as a sign
//! - **Grouping**: separators are stripped without checking their positions,
//!   but only the configured separator character is accepted
//! - **Integer width**: exact when the pattern has no `#`, at least the
//!   required width otherwise
//! - **Leading zeros**: a leading `0` is rejected unless it is part of an
//!   exact-width required form (`000` for `000`, `0` for `#0`)
//! - **Fraction width**: between the required and the maximum fraction digits
//! - **Precision**: at most 15 significant digits; leading integer zeros and
//!   trailing fraction zeros do not count, matching the formatter's budget
//!
//! ## Examples
//!
//! ```rust
//! use ldml_number::{get_parser, Separators};
//!
//! let parser = get_parser("#0.##;(#0.##)", Separators::default()).unwrap();
//! assert_eq!(parser.parse("(15.1)"), Some(-15.1));
//! assert_eq!(parser.parse("15.17"), Some(15.17));
//! assert_eq!(parser.parse("-15.17"), None);
//! ```

use crate::decimal::DecimalDigits;
use crate::format::MAX_SIGNIFICANT_DIGITS;
use crate::pattern::Section;
use crate::{PatternSpec, Separators};
use std::sync::Arc;

/// A compiled `&str -> Option<f64>` parsing function.
///
/// Cheap to clone and safe to share between threads.
#[derive(Clone, Debug)]
pub struct NumberParser {
    spec: Arc<PatternSpec>,
    separators: Separators,
}

impl NumberParser {
    pub fn new(spec: PatternSpec, separators: Separators) -> Self {
        Self::from_shared(Arc::new(spec), separators)
    }

    pub fn from_shared(spec: Arc<PatternSpec>, separators: Separators) -> Self {
        NumberParser { spec, separators }
    }

    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    pub fn separators(&self) -> Separators {
        self.separators
    }

    /// Parses text, returning `None` when it does not match the pattern.
    ///
    /// `Some(0.0)` and `Some(-0.0)` are valid results, distinct from `None`.
    pub fn parse(&self, text: &str) -> Option<f64> {
        if text.is_empty() {
            return None;
        }

        let value = [false, true]
            .into_iter()
            .find_map(|negative| self.parse_section(text, negative));

        if value.is_none() {
            tracing::trace!(text, "text does not match number pattern");
        }
        value
    }

    fn parse_section(&self, text: &str, negative: bool) -> Option<f64> {
        let (prefix, suffix) = self.spec.affix_texts(negative);
        let body = text.strip_prefix(prefix.as_str())?;
        let body = body.strip_suffix(suffix.as_str())?;

        let mut digits = self.parse_digits(body, self.spec.section(negative))?;
        if self.spec.is_percent {
            digits.shift_right(2);
        }

        let magnitude = digits.to_f64()?;
        Some(if negative { -magnitude } else { magnitude })
    }

    fn parse_digits(&self, body: &str, section: &Section) -> Option<DecimalDigits> {
        let Separators { thousands, decimal } = self.separators;

        let (integer, fraction) = match body.split_once(decimal) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (body, None),
        };

        let integer: String = if section.has_grouping() {
            integer.chars().filter(|&ch| ch != thousands).collect()
        } else {
            integer.to_string()
        };
        let fraction = fraction.unwrap_or_default();

        if !integer.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        // A decimal separator needs fraction placeholders to belong to.
        let max_fraction = section
            .fraction
            .max_digits()
            .unwrap_or(section.fraction.required);
        if body.contains(decimal) && max_fraction == 0 {
            return None;
        }

        if !integer_width_is_valid(&integer, section) {
            return None;
        }
        if fraction.len() < section.fraction.required || fraction.len() > max_fraction {
            return None;
        }

        let digits = DecimalDigits::from_parts(&integer, fraction)?;
        (digits.significant_len() <= MAX_SIGNIFICANT_DIGITS).then_some(digits)
    }
}

fn integer_width_is_valid(integer: &str, section: &Section) -> bool {
    let count = integer.len();
    let required = section.integer.required;

    let width_ok = if section.integer.has_optional() {
        count >= required
    } else {
        count == required
    };
    if !width_ok {
        return false;
    }

    // With no required digits the canonical zero is the empty string.
    let leading_zero = integer.starts_with('0');
    !(leading_zero && (required == 0 || (count > 1 && count != required)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile_pattern;

    fn parser(pattern: &str) -> NumberParser {
        NumberParser::new(compile_pattern(pattern).unwrap(), Separators::default())
    }

    #[test]
    fn test_negative_zero_is_distinct() {
        let p = parser("#");
        let value = p.parse("-").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());

        let p = parser("#,##0;(#,##0)");
        let value = p.parse("(0)").unwrap();
        assert!(value.is_sign_negative());
        assert!(p.parse("0").unwrap().is_sign_positive());
    }

    #[test]
    fn test_decimal_point_requires_fraction_placeholders() {
        let p = parser("#");
        assert_eq!(p.parse("123."), None);
        assert_eq!(p.parse("123"), Some(123.0));

        let p = parser("#.##");
        assert_eq!(p.parse("123."), Some(123.0));
    }

    #[test]
    fn test_affixes_must_match() {
        let p = parser("$ #,##0.##");
        assert_eq!(p.parse("$ 1,234.5"), Some(1234.5));
        assert_eq!(p.parse("-$ 1,234.5"), Some(-1234.5));
        assert_eq!(p.parse("1,234.5"), None);
        assert_eq!(p.parse("$1,234.5"), None);
        assert_eq!(p.parse("$ "), None);

        assert_eq!(parser("$ #").parse("$ "), Some(0.0));
    }

    #[test]
    fn test_ungrouped_pattern_rejects_separators() {
        let p = parser("#0");
        assert_eq!(p.parse("1,234"), None);
    }

    #[test]
    fn test_precision_limit() {
        let p = parser("#");
        assert_eq!(p.parse("123456789012345"), Some(123456789012345.0));
        assert_eq!(p.parse("1234567890123456"), None);

        // Required fraction padding does not count against the limit.
        let p = parser("#,##0.00");
        assert_eq!(p.parse("12,345,678,901,234.50"), Some(12345678901234.5));
        assert_eq!(p.parse("123,456,789,012,345.00"), Some(123456789012345.0));
        assert_eq!(p.parse("12,345,678,901,234.56"), None);
    }

    #[test]
    fn test_integer_width_rules() {
        let section = |pattern: &str| compile_pattern(pattern).unwrap().positive;

        assert!(integer_width_is_valid("0", &section("#,##0")));
        assert!(!integer_width_is_valid("000", &section("#,##0")));
        assert!(!integer_width_is_valid("01234", &section("#,##0")));
        assert!(integer_width_is_valid("000", &section("000")));
        assert!(!integer_width_is_valid("0", &section("#")));
        assert!(integer_width_is_valid("", &section("#")));
        assert!(!integer_width_is_valid("12", &section("#000")));
    }
}

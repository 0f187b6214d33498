//! Pattern inference from opaque formatting functions.
//!
//! [`get_format`] recovers a pattern equivalent to an arbitrary
//! `f64 -> String` function by sampling it with a fixed battery of values and
//! reading the shape of the output:
//!
//! | Sample | Reveals |
//! |--------|---------|
//! | `0` | Required integer and fraction digits |
//! | `1` | Together with the others, the affixes |
//! | `123456789012345` | Grouping, integer truncation |
//! | `0.12345678912345` | Decimal separator, maximum fraction digits |
//! | `-123456789012345` | Implicit `-` or an explicit negative section |
//!
//! Prefix and suffix are the text every positive sample output shares, so
//! affixes may contain digits. Each sample is also tried divided by 100 to
//! detect percent patterns. A candidate is only accepted when its own
//! formatter reproduces every sample output byte for byte; otherwise inference
//! fails instead of guessing.
//!
//! The integer sample has fifteen digits, so group sizes of fifteen or more
//! and fifteen or more required integer zeros cannot be observed.
//!
//! ## Examples
//!
//! ```rust
//! use ldml_number::{get_format, get_formatter, Separators};
//!
//! let formatter = get_formatter("$ #,##0.##;($ #,##0.##)", Separators::default()).unwrap();
//! assert_eq!(get_format(&formatter).unwrap(), "$ #,##0.##;($ #,##0.##)");
//!
//! let fixed = |value: f64| format!("{:.2}", value);
//! assert_eq!(get_format(&fixed).unwrap(), "#0.00");
//! ```

use crate::pattern::{Affix, DigitSpec, OptionalDigits, Section};
use crate::{Error, NumberFormatter, PatternSpec, Result, Separators};

/// A number formatting function that can be sampled.
///
/// Implemented for every `Fn(f64) -> String` and for [`NumberFormatter`].
pub trait FormatFn {
    fn format_value(&self, value: f64) -> String;
}

impl<F> FormatFn for F
where
    F: Fn(f64) -> String + ?Sized,
{
    fn format_value(&self, value: f64) -> String {
        self(value)
    }
}

impl FormatFn for NumberFormatter {
    fn format_value(&self, value: f64) -> String {
        self.format(value)
    }
}

/// Sample values for one scaling hypothesis.
struct Battery {
    zero: f64,
    one: f64,
    integer: f64,
    fraction: f64,
    negative: f64,
}

impl Battery {
    fn values(&self) -> [f64; 5] {
        [self.zero, self.one, self.integer, self.fraction, self.negative]
    }
}

// Fraction digits contain no zero so trimming cannot hide a digit position.
const PLAIN: Battery = Battery {
    zero: 0.0,
    one: 1.0,
    integer: 123_456_789_012_345.0,
    fraction: 0.123_456_789_123_45,
    negative: -123_456_789_012_345.0,
};

const PERCENT: Battery = Battery {
    zero: 0.0,
    one: 0.01,
    integer: 1_234_567_890_123.45,
    fraction: 0.001_234_567_891_234_5,
    negative: -1_234_567_890_123.45,
};

/// Infers the pattern that reproduces `formatter`.
///
/// Plain scaling is tried before percent scaling. Among the patterns that
/// reproduce every sample, the one with the fewest optional digits is returned.
///
/// # Errors
///
/// Returns [`Error::FormatInference`] when no pattern reproduces the output.
pub fn get_format<F>(formatter: &F) -> Result<String>
where
    F: FormatFn + ?Sized,
{
    for (battery, percent) in [(&PLAIN, false), (&PERCENT, true)] {
        if let Some(spec) = infer_spec(formatter, battery, percent) {
            let pattern = spec.to_pattern();
            tracing::debug!(pattern = pattern.as_str(), percent, "inferred number pattern");
            return Ok(pattern);
        }
    }

    tracing::debug!("no number pattern reproduces the formatter output");
    Err(Error::format_inference(format!(
        "no pattern reproduces the output {:?} for {}",
        formatter.format_value(PLAIN.integer),
        PLAIN.integer
    )))
}

fn infer_spec<F>(formatter: &F, battery: &Battery, percent: bool) -> Option<PatternSpec>
where
    F: FormatFn + ?Sized,
{
    let integer_out = formatter.format_value(battery.integer);
    let zero_out = formatter.format_value(battery.zero);
    let one_out = formatter.format_value(battery.one);
    let fraction_out = formatter.format_value(battery.fraction);

    let (prefix, suffix) = shared_affixes(&integer_out, &[&zero_out, &one_out, &fraction_out]);
    let integer_body = strip_affixes(&integer_out, prefix, suffix)?;
    if !integer_body.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let zero_body = strip_affixes(&zero_out, prefix, suffix)?;
    let fraction_body = strip_affixes(&fraction_out, prefix, suffix)?;

    // The first fraction digit of the sample is always `1` once rounded.
    let (decimal, fraction_digits) = match fraction_body.find('1') {
        Some(index) => {
            let separator = fraction_body[..index].chars().next_back()?;
            if separator.is_ascii_digit() {
                return None;
            }
            let leading = &fraction_body[..index - separator.len_utf8()];
            if leading.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
                return None;
            }
            (Some(separator), fraction_body[index..].len())
        }
        None => (None, 0),
    };

    let (zero_integer, zero_fraction) = split_decimal(zero_body, decimal);
    if !only_zero_digits(zero_integer) || !only_zero_digits(zero_fraction) {
        return None;
    }
    let integer_required = count_digits(zero_integer);
    let fraction_required = count_digits(zero_fraction);
    if fraction_digits < fraction_required {
        return None;
    }

    let (integer_run, _) = split_decimal(integer_body, decimal);
    let thousands = single_separator(integer_run)?;
    let integer_digits = count_digits(integer_run);
    if integer_digits < integer_required {
        return None;
    }

    let group_sizes = match thousands {
        Some(separator) => {
            let mut observed: Vec<usize> = integer_run
                .split(separator)
                .skip(1)
                .map(str::len)
                .collect();
            observed.reverse();
            collapse_groups(&observed)
        }
        None => Vec::new(),
    };

    let positive = Section {
        prefix: affix_from_text(prefix, percent),
        suffix: affix_from_text(suffix, percent),
        integer: DigitSpec {
            required: integer_required,
            optional: if integer_digits > integer_required {
                OptionalDigits::Unbounded
            } else {
                OptionalDigits::Absent
            },
        },
        fraction: DigitSpec {
            required: fraction_required,
            optional: match fraction_digits - fraction_required {
                0 => OptionalDigits::Absent,
                extra => OptionalDigits::AtMost(extra),
            },
        },
        group_sizes,
    };

    let negative_out = formatter.format_value(battery.negative);
    let negative = if negative_out == format!("-{integer_out}") {
        None
    } else {
        let (negative_prefix, negative_suffix) = negative_out.split_once(integer_body)?;
        Some(Section {
            prefix: affix_from_text(negative_prefix, percent),
            suffix: affix_from_text(negative_suffix, percent),
            ..positive.clone()
        })
    };

    let spec = PatternSpec::new(positive, negative);
    if spec.is_percent != percent {
        return None;
    }

    let separators = infer_separators(thousands, decimal);
    let candidate = NumberFormatter::new(spec, separators);
    let reproduces = battery
        .values()
        .into_iter()
        .all(|value| candidate.format(value) == formatter.format_value(value));

    reproduces.then(|| candidate.spec().clone())
}

/// Longest prefix and suffix of `output` shared by every one of `others`.
///
/// The suffix is searched after the prefix so the two never overlap.
fn shared_affixes<'a>(output: &'a str, others: &[&str]) -> (&'a str, &'a str) {
    let prefix_len = others
        .iter()
        .map(|other| common_prefix_len(output, other))
        .min()
        .unwrap_or(output.len());
    // Every other output starts with the same bytes, so the cut is a char boundary.
    let rest = &output[prefix_len..];
    let suffix_len = others
        .iter()
        .map(|other| common_suffix_len(rest, &other[prefix_len..]))
        .min()
        .unwrap_or(0);
    (&output[..prefix_len], &rest[rest.len() - suffix_len..])
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(ch, _)| ch.len_utf8())
        .sum()
}

fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .map(|(ch, _)| ch.len_utf8())
        .sum()
}

fn strip_affixes<'a>(output: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    output.strip_prefix(prefix)?.strip_suffix(suffix)
}

fn split_decimal(body: &str, decimal: Option<char>) -> (&str, &str) {
    decimal
        .and_then(|separator| body.split_once(separator))
        .unwrap_or((body, ""))
}

fn count_digits(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

fn only_zero_digits(text: &str) -> bool {
    text.chars().all(|ch| !ch.is_ascii_digit() || ch == '0')
}

/// The one grouping character used in an integer run, if any.
///
/// Returns `None` when more than one distinct non-digit appears.
fn single_separator(run: &str) -> Option<Option<char>> {
    let mut separators = run.chars().filter(|ch| !ch.is_ascii_digit());
    let first = separators.next();
    match first {
        Some(separator) if separators.any(|ch| ch != separator) => None,
        _ => Some(first),
    }
}

/// Shortest group-size list whose last-size-repeats expansion matches `observed`.
fn collapse_groups(observed: &[usize]) -> Vec<usize> {
    (1..=observed.len())
        .map(|len| &observed[..len])
        .find(|sizes| {
            observed
                .iter()
                .enumerate()
                .all(|(index, &size)| size == sizes[index.min(sizes.len() - 1)])
        })
        .map(<[usize]>::to_vec)
        .unwrap_or_default()
}

fn affix_from_text(text: &str, percent: bool) -> Affix {
    let mut affix = Affix::new();
    for ch in text.chars() {
        if percent && ch == '%' {
            affix.push_percent();
        } else {
            affix.push_literal(ch);
        }
    }
    affix
}

fn infer_separators(thousands: Option<char>, decimal: Option<char>) -> Separators {
    let defaults = Separators::default();
    match (thousands, decimal) {
        (Some(thousands), Some(decimal)) => Separators { thousands, decimal },
        (Some(thousands), None) => Separators {
            thousands,
            decimal: if thousands == defaults.decimal {
                defaults.thousands
            } else {
                defaults.decimal
            },
        },
        (None, Some(decimal)) => Separators {
            thousands: if decimal == defaults.thousands {
                defaults.decimal
            } else {
                defaults.thousands
            },
            decimal,
        },
        (None, None) => defaults,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_groups() {
        assert_eq!(collapse_groups(&[3, 3, 3]), vec![3]);
        assert_eq!(collapse_groups(&[3, 2, 2, 2]), vec![3, 2]);
        assert_eq!(collapse_groups(&[4, 4]), vec![4]);
        assert_eq!(collapse_groups(&[3]), vec![3]);
        assert!(collapse_groups(&[]).is_empty());
    }

    #[test]
    fn test_single_separator() {
        assert_eq!(single_separator("1,234,567"), Some(Some(',')));
        assert_eq!(single_separator("1234567"), Some(None));
        assert_eq!(single_separator("1,234 567"), None);
    }

    #[test]
    fn test_shared_affixes() {
        assert_eq!(
            shared_affixes("$ 1,234 USD", &["$ 0 USD", "$ 1 USD"]),
            ("$ ", " USD")
        );
        assert_eq!(shared_affixes("No1 12345", &["No1 0", "No1 1"]), ("No1 ", ""));
        assert_eq!(shared_affixes("1234 x1", &["0 x1", "1 x1"]), ("", " x1"));
        assert_eq!(shared_affixes("xx", &["xx"]), ("xx", ""));
        assert_eq!(shared_affixes("1 руб", &["0 руб"]), ("", " руб"));
    }

    #[test]
    fn test_infer_separators() {
        assert_eq!(
            infer_separators(Some('.'), None),
            Separators::new().with_thousands('.').with_decimal(',')
        );
        assert_eq!(
            infer_separators(None, Some(',')),
            Separators::new().with_thousands('.').with_decimal(',')
        );
        assert_eq!(infer_separators(None, None), Separators::default());
    }

    #[test]
    fn test_unreproducible_formatter_fails() {
        let shouting = |value: f64| format!("{value} units!!").to_uppercase();
        assert!(get_format(&shouting).is_ok());

        let random_width = |value: f64| {
            if value.abs() > 1.0 {
                format!("{value:.3}")
            } else {
                format!("{value:.1}")
            }
        };
        assert!(matches!(
            get_format(&random_width),
            Err(Error::FormatInference(_))
        ));
    }
}

//! Exact decimal numbers.
//!
//! Binary floating point cannot represent most decimal fractions, so scaling
//! by 100 for percents or rounding at a decimal place is done on the shortest
//! round-trip decimal expansion of the `f64` instead. `2.5785` scaled for a
//! percent pattern is exactly `257.85`, not `257.84999999999997`.

use num_bigint::BigUint;
use std::fmt;

/// Unsigned decimal number `mantissa / 10^scale`.
///
/// Kept normalized: when `scale > 0` the mantissa is never a multiple of ten,
/// so the fraction has no trailing zeros.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DecimalDigits {
    mantissa: BigUint,
    scale: usize,
}

impl DecimalDigits {
    /// Expands the magnitude of a finite `f64` without exponent notation.
    pub(crate) fn from_f64(value: f64) -> Self {
        // `Display` for f64 yields the shortest round-trip digits and never
        // switches to scientific notation.
        let text = value.abs().to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        Self::from_parts(integer, fraction).unwrap_or_default()
    }

    /// Builds a value from integer and fraction digit runs.
    ///
    /// Returns `None` if either run holds anything but ASCII digits.
    pub(crate) fn from_parts(integer: &str, fraction: &str) -> Option<Self> {
        let digits = format!("{integer}{fraction}");
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let mantissa = if digits.is_empty() {
            BigUint::default()
        } else {
            BigUint::parse_bytes(digits.as_bytes(), 10)?
        };
        let mut value = DecimalDigits {
            mantissa,
            scale: fraction.len(),
        };
        value.normalize();
        Some(value)
    }

    /// Integer digits; zero is `"0"`.
    pub(crate) fn integer(&self) -> String {
        self.split().0
    }

    /// Fraction digits without trailing zeros.
    pub(crate) fn fraction(&self) -> String {
        self.split().1
    }

    /// Digits that carry information: the integer part plus the fraction
    /// without trailing zeros.
    pub(crate) fn significant_len(&self) -> usize {
        let (integer, fraction) = self.split();
        integer.len() + fraction.len()
    }

    /// Multiplies by `10^places`.
    pub(crate) fn shift_left(&mut self, places: usize) {
        if self.scale >= places {
            self.scale -= places;
        } else {
            self.mantissa *= power_of_ten(places - self.scale);
            self.scale = 0;
        }
        self.normalize();
    }

    /// Divides by `10^places`.
    pub(crate) fn shift_right(&mut self, places: usize) {
        self.scale += places;
        self.normalize();
    }

    /// Rounds half away from zero to at most `places` fraction digits.
    pub(crate) fn round_half_away(&mut self, places: usize) {
        if self.scale <= places {
            return;
        }

        let divisor = power_of_ten(self.scale - places);
        let quotient = &self.mantissa / &divisor;
        let remainder = &self.mantissa % &divisor;
        self.mantissa = if remainder * 2u32 >= divisor {
            quotient + 1u32
        } else {
            quotient
        };
        self.scale = places;
        self.normalize();
    }

    /// Converts to the nearest `f64`.
    pub(crate) fn to_f64(&self) -> Option<f64> {
        self.to_string().parse().ok()
    }

    fn split(&self) -> (String, String) {
        let digits = self.mantissa.to_string();
        if self.scale == 0 {
            return (digits, String::new());
        }

        let padded = format!("{:0>width$}", digits, width = self.scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - self.scale);
        (integer.to_string(), fraction.to_string())
    }

    fn normalize(&mut self) {
        let ten = BigUint::from(10u32);
        while self.scale > 0 && &self.mantissa % &ten == BigUint::default() {
            self.mantissa /= &ten;
            self.scale -= 1;
        }
    }
}

fn power_of_ten(exponent: usize) -> BigUint {
    (0..exponent).fold(BigUint::from(1u32), |acc, _| acc * 10u32)
}

impl fmt::Display for DecimalDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (integer, fraction) = self.split();
        if fraction.is_empty() {
            write!(f, "{integer}")
        } else {
            write!(f, "{integer}.{fraction}")
        }
    }
}

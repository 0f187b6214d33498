//! Separator configuration for compiled patterns.
//!
//! Patterns are always written with `,` as the grouping mark and `.` as the
//! decimal point. The characters actually emitted (and expected when parsing)
//! come from [`Separators`], which callers pass explicitly with every call.
//! There is no ambient locale state.
//!
//! ## Examples
//!
//! ```rust
//! use ldml_number::{get_formatter, Separators};
//!
//! let german = Separators::new().with_thousands('.').with_decimal(',');
//! let formatter = get_formatter("#,##0.00", german).unwrap();
//! assert_eq!(formatter.format(1234.5), "1.234,50");
//! ```

use serde::{Deserialize, Serialize};

/// Thousands and decimal separator characters.
///
/// Defaults to `,` and `.`. Serializable so it can be stored alongside the
/// pattern string as locale configuration.
///
/// # Examples
///
/// ```rust
/// use ldml_number::Separators;
///
/// let separators = Separators::default();
/// assert_eq!(separators.thousands, ',');
/// assert_eq!(separators.decimal, '.');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Separators {
    pub thousands: char,
    pub decimal: char,
}

impl Default for Separators {
    fn default() -> Self {
        Separators {
            thousands: ',',
            decimal: '.',
        }
    }
}

impl Separators {
    /// Creates the default separators (`,` for thousands, `.` for decimals).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grouping separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ldml_number::Separators;
    ///
    /// let separators = Separators::new().with_thousands(' ');
    /// assert_eq!(separators.thousands, ' ');
    /// ```
    #[must_use]
    pub fn with_thousands(mut self, thousands: char) -> Self {
        self.thousands = thousands;
        self
    }

    /// Sets the decimal separator.
    #[must_use]
    pub fn with_decimal(mut self, decimal: char) -> Self {
        self.decimal = decimal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let separators = Separators::new().with_thousands(' ').with_decimal(',');
        assert_eq!(
            separators,
            Separators {
                thousands: ' ',
                decimal: ','
            }
        );
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let separators: Separators = serde_json::from_str(r#"{"decimal":","}"#).unwrap();
        assert_eq!(separators.thousands, ',');
        assert_eq!(separators.decimal, ',');

        let json = serde_json::to_string(&Separators::default()).unwrap();
        assert_eq!(json, r#"{"thousands":",","decimal":"."}"#);
    }
}

//! Error types for pattern compilation and format inference.
//!
//! Only two things can fail in this crate:
//!
//! - **Compilation**: a pattern with an unterminated quoted literal
//! - **Inference**: a formatting function whose output no pattern reproduces
//!
//! Parsing text is deliberately *not* an error path. A parser returns
//! `Option<f64>`, where `None` means "no value", because `0` and `-0` are both
//! legitimate parse results.
//!
//! ## Examples
//!
//! ```rust
//! use ldml_number::{compile_pattern, Error};
//!
//! let result = compile_pattern("#0 'units");
//! assert!(matches!(result, Err(Error::InvalidPattern { position: 3, .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while compiling or inferring patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Structurally malformed pattern (unbalanced quoting); `position` is a
    /// byte offset into the pattern
    #[error("Invalid pattern at position {position}: {msg}")]
    InvalidPattern { position: usize, msg: String },

    /// No candidate pattern reproduced every sampled output
    #[error("Format inference failed: {0}")]
    FormatInference(String),
}

impl Error {
    /// Creates an invalid pattern error pointing at a character offset in the pattern.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ldml_number::Error;
    ///
    /// let err = Error::invalid_pattern(4, "unterminated quoted literal");
    /// assert!(err.to_string().contains("position 4"));
    /// ```
    pub fn invalid_pattern(position: usize, msg: &str) -> Self {
        Error::InvalidPattern {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an inference error.
    pub fn format_inference<T: fmt::Display>(msg: T) -> Self {
        Error::FormatInference(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::invalid_pattern(7, "unterminated quoted literal");
        assert_eq!(
            err.to_string(),
            "Invalid pattern at position 7: unterminated quoted literal"
        );

        let err = Error::format_inference("no candidate matched");
        assert_eq!(
            err.to_string(),
            "Format inference failed: no candidate matched"
        );
    }
}

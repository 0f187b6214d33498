//! # ldml_number
//!
//! An LDML number pattern engine: compile a locale pattern such as `#,##0.00`
//! or `#0.##;(#0.##)` once, then format and parse numbers with it.
//!
//! ## What it does
//!
//! - **Compile**: a pattern string becomes an immutable [`PatternSpec`]
//! - **Format**: [`NumberFormatter`] turns an `f64` into text
//! - **Parse**: [`NumberParser`] turns text back into an `f64`, or `None`
//! - **Infer**: [`get_format`] recovers the pattern behind any `f64 -> String`
//!   function, including ones built by this crate
//!
//! Parser and formatter are exact inverses: every string the formatter emits
//! for a representable value parses back to that value, and the parser only
//! accepts the canonical shapes the formatter would produce (modulo grouping
//! positions, which are not checked).
//!
//! ## Quick Start
//!
//! ```rust
//! use ldml_number::{get_formatter, get_parser, Separators};
//!
//! let formatter = get_formatter("#,##0.00", Separators::default()).unwrap();
//! assert_eq!(formatter.format(1234.567), "1,234.57");
//!
//! let parser = get_parser("#,##0.00", Separators::default()).unwrap();
//! assert_eq!(parser.parse("1,234.57"), Some(1234.57));
//! assert_eq!(parser.parse("1,234.5"), None);
//! ```
//!
//! ### Negative sections and percents
//!
//! ```rust
//! use ldml_number::{get_formatter, get_parser, Separators};
//!
//! let formatter = get_formatter("#0.#%;(#0.#%)", Separators::default()).unwrap();
//! assert_eq!(formatter.format(2.5785), "257.9%");
//! assert_eq!(formatter.format(-0.45), "(45%)");
//!
//! let parser = get_parser("#0%", Separators::default()).unwrap();
//! assert_eq!(parser.parse("10%"), Some(0.1));
//! ```
//!
//! ### Locale separators
//!
//! Patterns always use `,` and `.`; the emitted characters are configured
//! per call:
//!
//! ```rust
//! use ldml_number::{get_formatter, Separators};
//!
//! let russian = Separators::new().with_thousands(' ').with_decimal(',');
//! let formatter = get_formatter("#,##0.## руб", russian).unwrap();
//! assert_eq!(formatter.format(1234.567), "1 234,57 руб");
//! ```
//!
//! ### Recovering a pattern
//!
//! ```rust
//! use ldml_number::get_format;
//!
//! let to_string = |value: f64| value.to_string();
//! assert_eq!(get_format(&to_string).unwrap(), "#0.##############");
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Formatting never fails: `NaN` and infinities format to the empty string
//! - Parsing never panics: anything unexpected is `None`
//! - Compiled specs are immutable and `Send + Sync`

pub mod cache;
mod decimal;
pub mod error;
pub mod format;
pub mod infer;
pub mod named;
pub mod options;
pub mod parse;
pub mod pattern;

pub use cache::PatternCache;
pub use error::{Error, Result};
pub use format::{NumberFormatter, MAX_SIGNIFICANT_DIGITS};
pub use infer::{get_format, FormatFn};
pub use named::{FormatKind, FormatSource, NamedFormat};
pub use options::Separators;
pub use parse::NumberParser;
pub use pattern::{Affix, AffixToken, DigitSpec, OptionalDigits, PatternSpec, Section};

/// Compile a pattern string into a [`PatternSpec`].
///
/// # Examples
///
/// ```rust
/// use ldml_number::compile_pattern;
///
/// let spec = compile_pattern("#0.##;(#0.##)").unwrap();
/// assert!(spec.negative.is_some());
/// assert!(!spec.is_percent);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if a quoted literal is never closed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn compile_pattern(pattern: &str) -> Result<PatternSpec> {
    pattern::compile(pattern)
}

/// Build a formatter for a pattern.
///
/// # Examples
///
/// ```rust
/// use ldml_number::{get_formatter, Separators};
///
/// let formatter = get_formatter("#,##,##0", Separators::default()).unwrap();
/// assert_eq!(formatter.format(123456789.0), "12,34,56,789");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if the pattern cannot be compiled.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn get_formatter(pattern: &str, separators: Separators) -> Result<NumberFormatter> {
    Ok(NumberFormatter::new(compile_pattern(pattern)?, separators))
}

/// Build a parser for a pattern.
///
/// # Examples
///
/// ```rust
/// use ldml_number::{get_parser, Separators};
///
/// let parser = get_parser("#,##0", Separators::default()).unwrap();
/// assert_eq!(parser.parse("12,34"), Some(1234.0));
/// assert_eq!(parser.parse("012"), None);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if the pattern cannot be compiled.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn get_parser(pattern: &str, separators: Separators) -> Result<NumberParser> {
    Ok(NumberParser::new(compile_pattern(pattern)?, separators))
}

/// Build a formatter from a raw pattern or a named format.
///
/// # Examples
///
/// ```rust
/// use ldml_number::{get_formatter_for, FormatKind, NamedFormat, Separators};
///
/// let currency = NamedFormat::new(FormatKind::Currency).with_precision(2);
/// let formatter = get_formatter_for(&currency.into(), Separators::default()).unwrap();
/// assert_eq!(formatter.format(-1234.5), "$-1,234.50");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if a raw pattern cannot be compiled.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn get_formatter_for(source: &FormatSource, separators: Separators) -> Result<NumberFormatter> {
    get_formatter(&source.to_pattern(), separators)
}

/// Build a parser from a raw pattern or a named format.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if a raw pattern cannot be compiled.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn get_parser_for(source: &FormatSource, separators: Separators) -> Result<NumberParser> {
    get_parser(&source.to_pattern(), separators)
}

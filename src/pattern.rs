//! Pattern compilation.
//!
//! This module turns an LDML number pattern such as `#,##0.00` or
//! `#0.##;(#0.##)` into a [`PatternSpec`], the immutable description shared by
//! the formatter and the parser.
//!
//! ## Pattern syntax
//!
//! | Character | Meaning |
//! |-----------|---------|
//! | `0` | Required digit |
//! | `#` | Optional digit |
//! | `.` | Decimal point (first one in the digit run) |
//! | `,` | Grouping separator, only inside the integer digits |
//! | `;` | Separates the positive and the negative section |
//! | `%` | Percent: the value is scaled by 100 |
//! | `'...'` | Quoted literal text, `''` is a literal quote |
//!
//! Any other character is literal text. Text before the digits is the prefix
//! of the section and text after them is its suffix.
//!
//! ## Examples
//!
//! ```rust
//! use ldml_number::compile_pattern;
//!
//! let spec = compile_pattern("$ #,##0.00").unwrap();
//! assert_eq!(spec.positive.prefix.text(), "$ ");
//! assert_eq!(spec.positive.integer.required, 1);
//! assert_eq!(spec.positive.fraction.required, 2);
//! assert_eq!(spec.positive.group_sizes, vec![3]);
//! assert!(spec.negative.is_none());
//! ```

use crate::{Error, Result};
use std::fmt;

const QUOTE: char = '\'';
const SPECIAL_CHARS: &[char] = &['#', '0', ',', '.', ';', '%', QUOTE];

/// Upper bound on optional digits a section may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OptionalDigits {
    /// No `#` placeholders
    #[default]
    Absent,
    /// Any number of extra digits (integer side with a `#`)
    Unbounded,
    /// At most this many extra digits (fraction side, one per `#`)
    AtMost(usize),
}

/// Digit-width rules for one side of the decimal point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DigitSpec {
    pub required: usize,
    pub optional: OptionalDigits,
}

impl DigitSpec {
    pub const fn has_optional(&self) -> bool {
        !matches!(self.optional, OptionalDigits::Absent)
    }

    /// Largest digit count allowed, or `None` when unbounded.
    pub const fn max_digits(&self) -> Option<usize> {
        match self.optional {
            OptionalDigits::Absent => Some(self.required),
            OptionalDigits::Unbounded => None,
            OptionalDigits::AtMost(extra) => Some(self.required + extra),
        }
    }
}

/// A piece of prefix or suffix text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AffixToken {
    Literal(String),
    /// An unquoted `%`, which also switches the pattern to percent scaling
    Percent,
}

/// Literal text around the digits of a section.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Affix(Vec<AffixToken>);

impl Affix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[AffixToken] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_percent(&self) -> bool {
        self.0.iter().any(|token| *token == AffixToken::Percent)
    }

    /// The text emitted on format and expected on parse.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for token in &self.0 {
            match token {
                AffixToken::Literal(literal) => text.push_str(literal),
                AffixToken::Percent => text.push('%'),
            }
        }
        text
    }

    pub fn push_literal(&mut self, ch: char) {
        match self.0.last_mut() {
            Some(AffixToken::Literal(literal)) => literal.push(ch),
            _ => self.0.push(AffixToken::Literal(ch.to_string())),
        }
    }

    pub fn push_percent(&mut self) {
        self.0.push(AffixToken::Percent);
    }

    fn write_pattern(&self, out: &mut String) {
        for token in &self.0 {
            match token {
                AffixToken::Literal(literal) => write_quoted_literal(literal, out),
                AffixToken::Percent => out.push('%'),
            }
        }
    }
}

/// One half (positive or negative) of a compiled pattern.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Section {
    pub prefix: Affix,
    pub suffix: Affix,
    pub integer: DigitSpec,
    pub fraction: DigitSpec,
    /// Group widths from the decimal point leftwards; the last one repeats.
    pub group_sizes: Vec<usize>,
}

impl Section {
    pub fn has_grouping(&self) -> bool {
        !self.group_sizes.is_empty()
    }

    fn has_percent(&self) -> bool {
        self.prefix.has_percent() || self.suffix.has_percent()
    }

    fn write_pattern(&self, out: &mut String) {
        self.prefix.write_pattern(out);
        write_integer_placeholders(&self.integer, &self.group_sizes, out);

        let fraction_digits = self.fraction.max_digits().unwrap_or(self.fraction.required);
        if fraction_digits > 0 {
            out.push('.');
            out.push_str(&"0".repeat(self.fraction.required));
            out.push_str(&"#".repeat(fraction_digits - self.fraction.required));
        }

        self.suffix.write_pattern(out);
    }
}

/// A compiled number pattern.
///
/// Immutable once built. Without an explicit negative section the positive
/// one is reused for negative values behind a leading `-`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSpec {
    pub positive: Section,
    pub negative: Option<Section>,
    pub is_percent: bool,
}

impl PatternSpec {
    /// Assembles a spec from sections; percent scaling follows from their affixes.
    pub fn new(positive: Section, negative: Option<Section>) -> Self {
        let is_percent =
            positive.has_percent() || negative.as_ref().map_or(false, Section::has_percent);
        PatternSpec {
            positive,
            negative,
            is_percent,
        }
    }

    /// The section whose digit rules apply to values of the given sign.
    pub fn section(&self, negative: bool) -> &Section {
        match (&self.negative, negative) {
            (Some(section), true) => section,
            _ => &self.positive,
        }
    }

    /// Prefix and suffix text for values of the given sign, including the
    /// implicit `-` when no negative section was compiled.
    pub fn affix_texts(&self, negative: bool) -> (String, String) {
        let section = self.section(negative);
        let mut prefix = section.prefix.text();
        if negative && self.negative.is_none() {
            prefix.insert(0, '-');
        }
        (prefix, section.suffix.text())
    }

    /// Renders the canonical pattern text for this spec.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ldml_number::compile_pattern;
    ///
    /// let spec = compile_pattern("#,##,##0.0#").unwrap();
    /// assert_eq!(spec.to_pattern(), "#,##,##0.0#");
    /// ```
    pub fn to_pattern(&self) -> String {
        let mut out = String::new();
        self.positive.write_pattern(&mut out);
        if let Some(negative) = &self.negative {
            out.push(';');
            negative.write_pattern(&mut out);
        }
        out
    }
}

impl fmt::Display for PatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pattern())
    }
}

/// A pattern character together with whether it came from a quoted run.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PatternChar {
    ch: char,
    quoted: bool,
}

impl PatternChar {
    fn is(&self, ch: char) -> bool {
        !self.quoted && self.ch == ch
    }

    fn is_digit_run(&self) -> bool {
        !self.quoted && matches!(self.ch, '#' | '0' | ',' | '.')
    }

    fn is_placeholder(&self) -> bool {
        !self.quoted && matches!(self.ch, '#' | '0')
    }
}

/// Compiles a pattern string into a [`PatternSpec`].
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] when a quoted literal is never closed.
/// Every other pattern is accepted.
pub fn compile(pattern: &str) -> Result<PatternSpec> {
    let chars = tokenize(pattern)?;

    let spec = match chars.iter().position(|c| c.is(';')) {
        Some(split) => PatternSpec::new(
            compile_section(&chars[..split]),
            Some(compile_section(&chars[split + 1..])),
        ),
        None => PatternSpec::new(compile_section(&chars), None),
    };

    tracing::debug!(pattern, is_percent = spec.is_percent, "compiled number pattern");
    Ok(spec)
}

fn tokenize(pattern: &str) -> Result<Vec<PatternChar>> {
    let mut chars = pattern.char_indices().peekable();
    let mut out = Vec::with_capacity(pattern.len());
    let mut quote_start = None;

    while let Some((offset, ch)) = chars.next() {
        if ch != QUOTE {
            out.push(PatternChar {
                ch,
                quoted: quote_start.is_some(),
            });
            continue;
        }
        if chars.next_if(|&(_, next)| next == QUOTE).is_some() {
            out.push(PatternChar { ch, quoted: true });
            continue;
        }
        quote_start = match quote_start {
            Some(_) => None,
            None => Some(offset),
        };
    }

    match quote_start {
        Some(position) => Err(Error::invalid_pattern(
            position,
            "unterminated quoted literal",
        )),
        None => Ok(out),
    }
}

fn find_digit_run(chars: &[PatternChar]) -> Option<(usize, usize)> {
    let mut start = 0;
    while start < chars.len() {
        if !chars[start].is_digit_run() {
            start += 1;
            continue;
        }
        let end = chars[start..]
            .iter()
            .position(|c| !c.is_digit_run())
            .map_or(chars.len(), |offset| start + offset);
        if chars[start..end].iter().any(PatternChar::is_placeholder) {
            return Some((start, end));
        }
        start = end;
    }
    None
}

fn compile_affix(chars: &[PatternChar]) -> Affix {
    let mut affix = Affix::new();
    for c in chars {
        if c.is('%') {
            affix.push_percent();
        } else {
            affix.push_literal(c.ch);
        }
    }
    affix
}

fn compile_section(chars: &[PatternChar]) -> Section {
    let Some((start, end)) = find_digit_run(chars) else {
        return Section {
            prefix: compile_affix(chars),
            ..Section::default()
        };
    };

    let digits: Vec<char> = chars[start..end].iter().map(|c| c.ch).collect();
    let (integer, fraction) = match digits.iter().position(|&ch| ch == '.') {
        Some(point) => (&digits[..point], &digits[point + 1..]),
        None => (&digits[..], &[][..]),
    };

    let count = |part: &[char], wanted: char| part.iter().filter(|&&ch| ch == wanted).count();

    let integer_spec = DigitSpec {
        required: count(integer, '0'),
        optional: if count(integer, '#') > 0 {
            OptionalDigits::Unbounded
        } else {
            OptionalDigits::Absent
        },
    };
    let fraction_spec = DigitSpec {
        required: count(fraction, '0'),
        optional: match count(fraction, '#') {
            0 => OptionalDigits::Absent,
            extra => OptionalDigits::AtMost(extra),
        },
    };

    let mut group_sizes: Vec<usize> = integer
        .split(|&ch| ch == ',')
        .skip(1)
        .map(|group| group.iter().filter(|&&ch| ch == '#' || ch == '0').count())
        .filter(|&size| size > 0)
        .collect();
    group_sizes.reverse();

    Section {
        prefix: compile_affix(&chars[..start]),
        suffix: compile_affix(&chars[end..]),
        integer: integer_spec,
        fraction: fraction_spec,
        group_sizes,
    }
}

fn write_integer_placeholders(integer: &DigitSpec, group_sizes: &[usize], out: &mut String) {
    let grouped: usize = group_sizes.iter().sum();
    let mut reversed = String::new();
    let mut position = 0;

    for &size in group_sizes {
        for _ in 0..size {
            reversed.push(if position < integer.required { '0' } else { '#' });
            position += 1;
        }
        reversed.push(',');
    }

    let lead_zeros = integer.required.saturating_sub(grouped);
    reversed.push_str(&"0".repeat(lead_zeros));
    if integer.has_optional() {
        reversed.push('#');
    }

    out.extend(reversed.chars().rev());
}

fn write_quoted_literal(literal: &str, out: &mut String) {
    let mut special = String::new();
    for ch in literal.chars() {
        if SPECIAL_CHARS.contains(&ch) {
            special.push(ch);
            continue;
        }
        flush_special(&mut special, out);
        out.push(ch);
    }
    flush_special(&mut special, out);
}

fn flush_special(special: &mut String, out: &mut String) {
    if special.is_empty() {
        return;
    }
    if special.chars().all(|ch| ch == QUOTE) {
        for _ in special.chars() {
            out.push_str("''");
        }
    } else {
        out.push(QUOTE);
        out.push_str(&special.replace(QUOTE, "''"));
        out.push(QUOTE);
    }
    special.clear();
}

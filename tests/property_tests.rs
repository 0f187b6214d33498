//! Property-based tests for the formatter/parser inverse guarantee.
//!
//! Values are drawn from decimal grids the patterns can represent exactly, so
//! every formatted string must parse back to the original `f64`.

use ldml_number::{get_formatter, get_parser, Separators};
use proptest::prelude::*;

fn roundtrip(pattern: &str, separators: Separators, value: f64) -> Option<f64> {
    let formatter = get_formatter(pattern, separators).unwrap();
    let parser = get_parser(pattern, separators).unwrap();
    let text = formatter.format(value);
    let parsed = parser.parse(&text);
    if parsed != Some(value) {
        eprintln!("{pattern}: {value} formatted as {text:?}, parsed as {parsed:?}");
    }
    parsed
}

proptest! {
    #[test]
    fn prop_grouped_integers(n in -999_999_999_999i64..=999_999_999_999i64) {
        let value = n as f64;
        prop_assert_eq!(roundtrip("#,##0", Separators::default(), value), Some(value));
    }

    #[test]
    fn prop_indian_grouping(n in 0i64..=99_999_999_999i64) {
        let value = n as f64;
        prop_assert_eq!(roundtrip("#,##,##0", Separators::default(), value), Some(value));
    }

    #[test]
    fn prop_cents(cents in -99_999_999_999i64..=99_999_999_999i64) {
        let value = cents as f64 / 100.0;
        prop_assert_eq!(roundtrip("#,##0.00", Separators::default(), value), Some(value));
    }

    #[test]
    fn prop_cents_with_negative_section(cents in -9_999_999_999i64..=9_999_999_999i64) {
        let value = cents as f64 / 100.0;
        let pattern = "$ #,##0.##;($ #,##0.##)";
        prop_assert_eq!(roundtrip(pattern, Separators::default(), value), Some(value));
    }

    #[test]
    fn prop_locale_separators(cents in 0i64..=99_999_999_999i64) {
        let value = cents as f64 / 100.0;
        let separators = Separators::new().with_thousands(' ').with_decimal(',');
        prop_assert_eq!(roundtrip("#,##0.## руб", separators, value), Some(value));
    }

    #[test]
    fn prop_basis_points(points in -9_999_999i64..=9_999_999i64) {
        let value = points as f64 / 10_000.0;
        prop_assert_eq!(roundtrip("#0.##%", Separators::default(), value), Some(value));
    }

    #[test]
    fn prop_fixed_width(n in 0i64..=99_999i64) {
        let value = n as f64;
        prop_assert_eq!(roundtrip("00000", Separators::default(), value), Some(value));
    }

    #[test]
    fn prop_parser_never_panics(text in "\\PC{0,24}") {
        for pattern in ["#", "#,##0.00", "#0.#%;(#0.#%)", "$ #,##0;($ #,##0)"] {
            let parser = get_parser(pattern, Separators::default()).unwrap();
            let _ = parser.parse(&text);
        }
    }

    #[test]
    fn prop_formatter_never_panics(value in any::<f64>()) {
        for pattern in ["#", "000", "#,##0.00", "#0.##%", "#.00#;(#.00#)"] {
            let formatter = get_formatter(pattern, Separators::default()).unwrap();
            let _ = formatter.format(value);
        }
    }
}

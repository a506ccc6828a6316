//! # Numeric Normalization
//!
//! Address tables arrive with "numeric-ish" text cells: decimal commas from
//! Spanish-locale spreadsheets, stray spaces, and blanks. Everything numeric
//! that the marker policy compares (coordinates, `difference`, `score`) goes
//! through this module once, at the boundary, so downstream code only sees
//! `Option<f64>`.
//!
//! ```rust
//! use geoview::normalize::normalize;
//!
//! assert_eq!(normalize("40,5"), Some(40.5));
//! assert_eq!(normalize("  -3.1 "), Some(-3.1));
//! assert_eq!(normalize(""), None);
//! assert_eq!(normalize("abc"), None);
//! ```

use serde::{Deserialize, Serialize};

/// Normalize a raw text cell into a finite number.
///
/// Trims surrounding whitespace, removes interior spaces, and turns a decimal
/// comma into a decimal point before parsing. Empty, unparseable and
/// non-finite inputs (`nan`, `inf`) yield `None`.
pub fn normalize(raw: &str) -> Option<f64> {
    let cleaned = clean(raw);
    if cleaned.is_empty() {
        return None;
    }
    parse_finite(&cleaned)
}

fn clean(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A numeric cell after boundary parsing.
///
/// Carries the same value as [`normalize`] but remembers whether a missing
/// value came from an empty cell or from text that failed to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "raw", rename_all = "snake_case")]
pub enum NumericCell {
    /// The cell parsed to a finite number
    Value(f64),
    /// The cell was empty or whitespace only (or the column is absent)
    Blank,
    /// The cell held text that is not a number; the original text is kept
    Unparseable(String),
}

impl NumericCell {
    /// Parse a raw cell.
    pub fn parse(raw: &str) -> Self {
        let cleaned = clean(raw);
        if cleaned.is_empty() {
            return NumericCell::Blank;
        }
        match parse_finite(&cleaned) {
            Some(v) => NumericCell::Value(v),
            None => NumericCell::Unparseable(raw.to_string()),
        }
    }

    /// Parse an optional cell; an absent column reads as blank.
    pub fn parse_opt(raw: Option<&str>) -> Self {
        raw.map_or(NumericCell::Blank, NumericCell::parse)
    }

    /// The numeric value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            NumericCell::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether the cell was empty.
    pub fn is_blank(&self) -> bool {
        matches!(self, NumericCell::Blank)
    }

    /// Strict `value < bound`; missing values compare false.
    pub fn lt(&self, bound: f64) -> bool {
        self.value().is_some_and(|v| v < bound)
    }

    /// Strict `value > bound`; missing values compare false.
    pub fn gt(&self, bound: f64) -> bool {
        self.value().is_some_and(|v| v > bound)
    }
}

impl std::fmt::Display for NumericCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Whole numbers keep one decimal, as floats do in a data frame
            NumericCell::Value(v) if v.fract() == 0.0 && v.abs() < 1e16 => write!(f, "{:.1}", v),
            NumericCell::Value(v) => write!(f, "{}", v),
            NumericCell::Blank => write!(f, "nan"),
            NumericCell::Unparseable(_) => write!(f, "nan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decimal_comma() {
        assert_eq!(normalize("40,5"), Some(40.5));
        assert_eq!(normalize("-34,603722"), Some(-34.603722));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(normalize("  -3.1 "), Some(-3.1));
        assert_eq!(normalize("- 58. 38"), Some(-58.38));
        assert_eq!(normalize("\t12\n"), Some(12.0));
    }

    #[test]
    fn test_missing() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("abc"), None);
        assert_eq!(normalize("1,2,3"), None);
    }

    #[test]
    fn test_non_finite_is_missing() {
        assert_eq!(normalize("nan"), None);
        assert_eq!(normalize("NaN"), None);
        assert_eq!(normalize("inf"), None);
        assert_eq!(normalize("-infinity"), None);
    }

    #[test]
    fn test_cell_kinds() {
        assert_eq!(NumericCell::parse("0,8"), NumericCell::Value(0.8));
        assert_eq!(NumericCell::parse(" "), NumericCell::Blank);
        assert_eq!(NumericCell::parse_opt(None), NumericCell::Blank);
        assert_eq!(
            NumericCell::parse("n/a"),
            NumericCell::Unparseable("n/a".to_string())
        );
    }

    #[test]
    fn test_comparisons_with_missing_are_false() {
        let blank = NumericCell::Blank;
        let garbled = NumericCell::parse("x");
        assert!(!blank.lt(100.0));
        assert!(!blank.gt(0.5));
        assert!(!garbled.lt(100.0));
        assert!(!garbled.gt(0.5));

        assert!(NumericCell::Value(99.9).lt(100.0));
        assert!(!NumericCell::Value(100.0).lt(100.0));
        assert!(!NumericCell::Value(0.5).gt(0.5));
    }

    #[test]
    fn test_display_as_float() {
        assert_eq!(NumericCell::Value(50.0).to_string(), "50.0");
        assert_eq!(NumericCell::Value(-3.0).to_string(), "-3.0");
        assert_eq!(NumericCell::Value(42.5).to_string(), "42.5");
        assert_eq!(NumericCell::Value(0.91).to_string(), "0.91");
        assert_eq!(NumericCell::Blank.to_string(), "nan");
        assert_eq!(NumericCell::parse("x").to_string(), "nan");
    }

    proptest! {
        #[test]
        fn prop_never_panics(s in "\\PC*") {
            let _ = normalize(&s);
            let _ = NumericCell::parse(&s);
        }

        #[test]
        fn prop_comma_and_point_agree(int in -180i32..180, frac in 0u32..1_000_000) {
            let with_point = format!("{}.{:06}", int, frac);
            let with_comma = format!("{},{:06}", int, frac);
            prop_assert_eq!(normalize(&with_point), normalize(&with_comma));
        }

        #[test]
        fn prop_cell_matches_normalize(s in "[ 0-9,.a-z-]{0,12}") {
            prop_assert_eq!(NumericCell::parse(&s).value(), normalize(&s));
        }
    }
}

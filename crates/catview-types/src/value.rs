use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Decimal literal accepted as a number: optional sign, integer and/or
/// fraction, optional exponent, surrounding whitespace allowed.
static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?\s*$").unwrap()
});

/// Opportunistically typed view of one raw CSV cell.
///
/// Cells are stored as text and typed on read, so the original spelling
/// (e.g. `"007"` or `"TRUE"`) is never lost.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn infer(raw: &str) -> Self {
        match raw {
            "" => FieldValue::Empty,
            "true" | "TRUE" => FieldValue::Bool(true),
            "false" | "FALSE" => FieldValue::Bool(false),
            _ => parse_number(raw)
                .map(FieldValue::Number)
                .unwrap_or_else(|| FieldValue::Text(raw.to_string())),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    if !NUMBER_REGEX.is_match(raw) {
        return None;
    }
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_empty() {
        assert_eq!(FieldValue::infer(""), FieldValue::Empty);
        assert!(FieldValue::infer("").is_empty());
    }

    #[test]
    fn test_infer_booleans_only_for_exact_spellings() {
        assert_eq!(FieldValue::infer("true"), FieldValue::Bool(true));
        assert_eq!(FieldValue::infer("TRUE"), FieldValue::Bool(true));
        assert_eq!(FieldValue::infer("false"), FieldValue::Bool(false));
        assert_eq!(FieldValue::infer("FALSE"), FieldValue::Bool(false));
        assert_eq!(
            FieldValue::infer("True"),
            FieldValue::Text("True".to_string())
        );
    }

    #[test]
    fn test_infer_numbers() {
        assert_eq!(FieldValue::infer("3"), FieldValue::Number(3.0));
        assert_eq!(FieldValue::infer("1.25"), FieldValue::Number(1.25));
        assert_eq!(FieldValue::infer(".5"), FieldValue::Number(0.5));
        assert_eq!(FieldValue::infer("-2"), FieldValue::Number(-2.0));
        assert_eq!(FieldValue::infer(" 4.5 "), FieldValue::Number(4.5));
        assert_eq!(FieldValue::infer("1e3"), FieldValue::Number(1000.0));
    }

    #[test]
    fn test_infer_rejects_non_decimal_spellings() {
        for raw in ["1,5", "inf", "NaN", "0x10", "1.2.3", "12 kg", "+3"] {
            assert_eq!(
                FieldValue::infer(raw),
                FieldValue::Text(raw.to_string()),
                "{raw:?} should stay text"
            );
        }
    }

    #[test]
    fn test_display_round_trips_text() {
        assert_eq!(FieldValue::infer("Leche").to_string(), "Leche");
        assert_eq!(FieldValue::infer("").to_string(), "");
    }
}

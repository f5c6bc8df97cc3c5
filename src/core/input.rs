use crate::domain::model::NumericValue;
use crate::utils::error::{Fault, Result};

// 2^63，f64 可以精確表示
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A parsed `number` parameter: the raw text, the value as written, and the
/// integer every property is computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericInput {
    pub raw: String,
    pub value: NumericValue,
    pub integer: i64,
}

impl NumericInput {
    /// Parses as a decimal when `raw` contains a `.`, otherwise as an integer.
    /// Surrounding whitespace is ignored. Decimals are truncated toward zero;
    /// non-finite decimals and ones whose truncation does not fit in `i64` are
    /// rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let text = raw.trim();

        let (value, integer) = if raw.contains('.') {
            let decimal: f64 = text.parse().map_err(|_| Fault::validation(raw))?;
            let integer = truncate(decimal).ok_or_else(|| Fault::validation(raw))?;
            (NumericValue::Decimal(decimal), integer)
        } else {
            let integer: i64 = text.parse().map_err(|_| Fault::validation(raw))?;
            (NumericValue::Integer(integer), integer)
        };

        Ok(Self {
            raw: raw.to_string(),
            value,
            integer,
        })
    }
}

fn truncate(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < -I64_BOUND || truncated >= I64_BOUND {
        return None;
    }
    Some(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(raw: &str) {
        match NumericInput::parse(raw) {
            Err(Fault::Validation { input }) => assert_eq!(input, raw),
            other => panic!("expected validation error for {:?}, got {:?}", raw, other),
        }
    }

    #[test]
    fn test_parse_integer() {
        let input = NumericInput::parse("153").unwrap();
        assert_eq!(input.value, NumericValue::Integer(153));
        assert_eq!(input.integer, 153);
        assert_eq!(input.raw, "153");

        assert_eq!(NumericInput::parse("-28").unwrap().integer, -28);
        assert_eq!(NumericInput::parse("+5").unwrap().integer, 5);
        assert_eq!(NumericInput::parse(" 12 ").unwrap().integer, 12);
    }

    #[test]
    fn test_parse_decimal_truncates_toward_zero() {
        let input = NumericInput::parse("7.5").unwrap();
        assert_eq!(input.value, NumericValue::Decimal(7.5));
        assert_eq!(input.integer, 7);

        assert_eq!(NumericInput::parse("-7.9").unwrap().integer, -7);
        assert_eq!(NumericInput::parse("-0.5").unwrap().integer, 0);
        assert_eq!(NumericInput::parse(".5").unwrap().integer, 0);
        assert_eq!(NumericInput::parse("5.").unwrap().integer, 5);
        assert_eq!(NumericInput::parse("1.5e3").unwrap().integer, 1500);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for raw in ["", " ", "abc", "12abc", "1e5", "1.2.3", ".", "-", "1_000"] {
            assert_invalid(raw);
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_invalid("9223372036854775808");
        assert_invalid("1.0e19");
        assert_invalid("1.0e400");
        assert_invalid("inf.0");
    }

    #[test]
    fn test_parse_accepts_i64_extremes() {
        assert_eq!(
            NumericInput::parse("-9223372036854775808").unwrap().integer,
            i64::MIN
        );
        assert_eq!(
            NumericInput::parse("9223372036854775807").unwrap().integer,
            i64::MAX
        );
    }
}

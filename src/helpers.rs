use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Serialize, Serializer};
use serde_json::Number;

use crate::error::Error;

/// Rounds to `scale` fractional digits, ties to the even neighbour.
pub fn round_half_even(value: &BigDecimal, scale: i64) -> BigDecimal {
    value.with_scale_round(scale, RoundingMode::HalfEven)
}

/// Shortest round-trip decimal text of the float, as an exact decimal.
pub fn decimal_from_f64(value: f64) -> Result<BigDecimal, Error> {
    if !value.is_finite() {
        return Err(Error::ArithmeticError(format!(
            "value is not finite: {}",
            value
        )));
    }

    let val = BigDecimal::from_str(&value.to_string())?;
    Ok(val)
}

/// Nearest `f64` to the decimal, going through its text form so the
/// result is correctly rounded.
pub fn decimal_to_f64(value: &BigDecimal) -> Result<f64, Error> {
    let number: f64 = value.to_string().parse().map_err(|_| {
        Error::ArithmeticError(format!("{} does not fit in f64", value))
    })?;

    if !number.is_finite() {
        return Err(Error::ArithmeticError(format!(
            "{} does not fit in f64",
            value
        )));
    }

    Ok(number)
}

/// JSON numbers keep their literal text (`arbitrary_precision`), so
/// `320000.00` stays `320000.00` instead of a binary approximation.
pub fn decimal_from_number(value: &Number) -> Result<BigDecimal, Error> {
    let val = BigDecimal::from_str(&value.to_string())?;
    Ok(val)
}

pub fn serialize_decimal_as_number<S>(
    value: &BigDecimal,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = Number::from_str(&value.to_string())
        .map_err(<S::Error as serde::ser::Error>::custom)?;
    number.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn test_round_half_even_ties_go_to_even() {
        assert_eq!(round_half_even(&dec("1.005"), 2), dec("1.00"));
        assert_eq!(round_half_even(&dec("1.015"), 2), dec("1.02"));
        assert_eq!(round_half_even(&dec("2.5"), 0), dec("2"));
        assert_eq!(round_half_even(&dec("3.5"), 0), dec("4"));
        assert_eq!(round_half_even(&dec("1428.026543822019"), 2), dec("1428.03"));
    }

    #[test]
    fn test_round_half_even_keeps_scale() {
        let rounded = round_half_even(&dec("0.0345"), 10);
        assert_eq!(rounded.to_string(), "0.0345000000");
    }

    #[test]
    fn test_decimal_from_f64_uses_shortest_text() {
        assert_eq!(decimal_from_f64(0.1).unwrap(), dec("0.1"));
        assert_eq!(decimal_from_f64(1579.83285119681).unwrap(), dec("1579.83285119681"));
    }

    #[test]
    fn test_decimal_from_f64_rejects_non_finite() {
        assert!(matches!(
            decimal_from_f64(f64::NAN),
            Err(Error::ArithmeticError(_))
        ));
        assert!(matches!(
            decimal_from_f64(f64::INFINITY),
            Err(Error::ArithmeticError(_))
        ));
    }

    #[test]
    fn test_decimal_to_f64_is_correctly_rounded() {
        assert_eq!(decimal_to_f64(&dec("0.0428")).unwrap(), 0.0428);
        assert_eq!(decimal_to_f64(&dec("0.0035666667")).unwrap(), 0.0035666667);
        assert_eq!(decimal_to_f64(&dec("1579.83")).unwrap(), 1579.83);
    }

    #[test]
    fn test_decimal_from_number() {
        let number: Number = serde_json::from_str("320000.5").unwrap();
        assert_eq!(decimal_from_number(&number).unwrap(), dec("320000.5"));

        let number: Number = serde_json::from_str("80000").unwrap();
        assert_eq!(decimal_from_number(&number).unwrap(), dec("80000"));

        let number: Number = serde_json::from_str("320000.00").unwrap();
        assert_eq!(decimal_from_number(&number).unwrap().to_string(), "320000.00");
    }

    #[test]
    fn test_decimal_from_number_keeps_digits_beyond_f64() {
        let number: Number =
            serde_json::from_str("400000000.000000005").unwrap();
        let value = decimal_from_number(&number).unwrap();

        assert_eq!(value, dec("400000000.000000005"));
        assert!(value > dec("400000000.000000004"));
    }

    #[derive(Serialize)]
    struct Amount {
        #[serde(serialize_with = "serialize_decimal_as_number")]
        value: BigDecimal,
    }

    #[test]
    fn test_serialize_decimal_keeps_scale() {
        let json = serde_json::to_string(&Amount { value: dec("1000.00") }).unwrap();
        assert_eq!(json, r#"{"value":1000.00}"#);

        let json = serde_json::to_string(&Amount { value: dec("0.0345") }).unwrap();
        assert_eq!(json, r#"{"value":0.0345}"#);
    }
}

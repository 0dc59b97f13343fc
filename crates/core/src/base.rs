use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported numeric bases for conversion.
///
/// Serialized as the plain radix (`2`, `8`, `10`, `16`) so operation requests
/// read the same way the conversion is described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(&self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Base::Binary => "binary",
            Base::Octal => "octal",
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
        }
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> u32 {
        base.radix()
    }
}

impl TryFrom<u32> for Base {
    type Error = Error;

    fn try_from(radix: u32) -> Result<Self, Error> {
        match radix {
            2 => Ok(Base::Binary),
            8 => Ok(Base::Octal),
            10 => Ok(Base::Decimal),
            16 => Ok(Base::Hexadecimal),
            other => Err(Error::InvalidInput(format!(
                "unsupported base: {other}. Valid bases: 2, 8, 10, 16"
            ))),
        }
    }
}

impl std::str::FromStr for Base {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let radix: u32 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("not a base: {s}. Valid bases: 2, 8, 10, 16")))?;
        Base::try_from(radix)
    }
}

/// Convert `input` from one base to another.
///
/// Parsing follows the source tool's behavior: an optional leading sign, then
/// the longest prefix of digits valid in `from`. Trailing garbage is ignored,
/// but an input with no valid digits at all is an [`Error::InvalidInput`].
/// Empty (or whitespace-only) input converts to an empty string. Hexadecimal
/// output is uppercased.
pub fn convert(input: &str, from: Base, to: Base) -> Result<String, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: u128 = 0;
    let mut consumed = 0usize;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(from.radix()) else {
            break;
        };
        value = value
            .checked_mul(from.radix() as u128)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or_else(|| Error::InvalidInput(format!("value out of range: {trimmed}")))?;
        consumed += 1;
    }

    if consumed == 0 {
        return Err(Error::InvalidInput(format!(
            "no valid base-{} digits in: {trimmed}",
            from.radix()
        )));
    }

    let mut result = format_radix(value, to.radix());
    if to == Base::Hexadecimal {
        result = result.to_uppercase();
    }
    if negative && value != 0 {
        result.insert(0, '-');
    }

    Ok(result)
}

fn format_radix(mut value: u128, radix: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        let digit = (value % radix as u128) as u32;
        digits.push(char::from_digit(digit, radix).unwrap());
        value /= radix as u128;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_decimal_to_binary() {
        assert_eq!(convert("10", Base::Decimal, Base::Binary).unwrap(), "1010");
    }

    #[test]
    fn test_convert_decimal_to_hex_uppercases() {
        assert_eq!(
            convert("255", Base::Decimal, Base::Hexadecimal).unwrap(),
            "FF"
        );
    }

    #[test]
    fn test_convert_hex_to_decimal_case_insensitive() {
        assert_eq!(convert("ff", Base::Hexadecimal, Base::Decimal).unwrap(), "255");
        assert_eq!(convert("FF", Base::Hexadecimal, Base::Decimal).unwrap(), "255");
    }

    #[test]
    fn test_convert_octal_to_binary() {
        assert_eq!(convert("17", Base::Octal, Base::Binary).unwrap(), "1111");
    }

    #[test]
    fn test_convert_zero() {
        assert_eq!(convert("0", Base::Decimal, Base::Binary).unwrap(), "0");
    }

    #[test]
    fn test_convert_empty_input_is_empty_output() {
        assert_eq!(convert("", Base::Decimal, Base::Binary).unwrap(), "");
        assert_eq!(convert("   ", Base::Decimal, Base::Binary).unwrap(), "");
    }

    #[test]
    fn test_convert_negative() {
        assert_eq!(
            convert("-255", Base::Decimal, Base::Hexadecimal).unwrap(),
            "-FF"
        );
    }

    #[test]
    fn test_convert_negative_zero_drops_sign() {
        assert_eq!(convert("-0", Base::Decimal, Base::Binary).unwrap(), "0");
    }

    #[test]
    fn test_convert_ignores_trailing_garbage() {
        // parseInt semantics: "12z" in base 10 is 12
        assert_eq!(convert("12z", Base::Decimal, Base::Binary).unwrap(), "1100");
        // "19" in base 8 stops at the 9
        assert_eq!(convert("19", Base::Octal, Base::Decimal).unwrap(), "1");
    }

    #[test]
    fn test_convert_no_valid_digits_fails() {
        let err = convert("zzz", Base::Decimal, Base::Binary).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        // '2' is not a binary digit
        let err = convert("2", Base::Binary, Base::Decimal).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_convert_round_trip_all_bases() {
        let bases = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];
        for n in [0u32, 1, 7, 8, 42, 255, 256, 65535, 123456] {
            for to in bases {
                let encoded = convert(&n.to_string(), Base::Decimal, to).unwrap();
                let decoded = convert(&encoded, to, Base::Decimal).unwrap();
                assert_eq!(decoded, n.to_string(), "round-trip via base {}", to.radix());
            }
        }
    }

    #[test]
    fn test_convert_overflow_fails() {
        let huge = "9".repeat(60);
        let err = convert(&huge, Base::Decimal, Base::Hexadecimal).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_base_try_from() {
        assert_eq!(Base::try_from(16).unwrap(), Base::Hexadecimal);
        assert!(Base::try_from(3).is_err());
    }

    #[test]
    fn test_base_from_str() {
        assert_eq!("10".parse::<Base>().unwrap(), Base::Decimal);
        assert!("ten".parse::<Base>().is_err());
    }
}

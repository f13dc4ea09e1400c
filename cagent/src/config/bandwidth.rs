//! Network interface speed strings.
//!
//! A speed is written as a positive decimal number followed by a single unit
//! letter: `K`, `M` or `G`, powers of 1000 bytes per second. Fractional
//! bytes are truncated.

use thiserror::Error;

/// Why a speed string was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseSpeedError {
    /// Fewer than two characters: no room for number and unit.
    #[error("can't parse")]
    TooShort,

    /// The part before the unit is not a number.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// The number is zero, negative or not finite.
    #[error("should be > 0.0")]
    NotPositive,

    /// The unit letter is not K, M or G.
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(char),
}

/// Parse a max-speed string into bytes per second.
///
/// An empty string yields 0, meaning the speed is detected at runtime.
///
/// # Errors
///
/// Returns a [`ParseSpeedError`] describing the malformed part.
///
/// # Examples
///
/// ```
/// use cagent::config::parse_max_speed;
///
/// assert_eq!(parse_max_speed("125M").unwrap(), 125_000_000);
/// assert_eq!(parse_max_speed("12.5G").unwrap(), 12_500_000_000);
/// assert_eq!(parse_max_speed("").unwrap(), 0);
/// assert!(parse_max_speed("5X").is_err());
/// assert!(parse_max_speed("abc").is_err());
/// ```
pub fn parse_max_speed(value: &str) -> Result<u64, ParseSpeedError> {
    if value.is_empty() {
        return Ok(0);
    }

    let mut chars = value.chars();
    let unit = chars.next_back().ok_or(ParseSpeedError::TooShort)?;
    let number = chars.as_str();
    if number.is_empty() {
        return Err(ParseSpeedError::TooShort);
    }

    let amount: f64 = number
        .parse()
        .map_err(|_| ParseSpeedError::InvalidNumber(number.to_string()))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ParseSpeedError::NotPositive);
    }

    let multiplier = match unit {
        'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        other => return Err(ParseSpeedError::UnsupportedUnit(other)),
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bytes = (amount * multiplier).trunc() as u64;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(parse_max_speed("1K").unwrap(), 1_000);
        assert_eq!(parse_max_speed("125M").unwrap(), 125_000_000);
        assert_eq!(parse_max_speed("12.5M").unwrap(), 12_500_000);
        assert_eq!(parse_max_speed("12.5G").unwrap(), 12_500_000_000);
    }

    #[test]
    fn test_fractional_bytes_truncated() {
        assert_eq!(parse_max_speed("1.0005K").unwrap(), 1_000);
        assert_eq!(parse_max_speed("1.9999999999K").unwrap(), 1_999);
        assert_eq!(parse_max_speed("0.5K").unwrap(), 500);
    }

    #[test]
    fn test_empty_means_auto() {
        assert_eq!(parse_max_speed("").unwrap(), 0);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(parse_max_speed("M"), Err(ParseSpeedError::TooShort));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            parse_max_speed("5X"),
            Err(ParseSpeedError::UnsupportedUnit('X'))
        );
        // Units are case-sensitive.
        assert_eq!(
            parse_max_speed("5m"),
            Err(ParseSpeedError::UnsupportedUnit('m'))
        );
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            parse_max_speed("abc"),
            Err(ParseSpeedError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_max_speed("1.2.3M"),
            Err(ParseSpeedError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_not_positive() {
        assert_eq!(parse_max_speed("0M"), Err(ParseSpeedError::NotPositive));
        assert_eq!(parse_max_speed("-5G"), Err(ParseSpeedError::NotPositive));
        assert_eq!(parse_max_speed("infK"), Err(ParseSpeedError::NotPositive));
        assert_eq!(parse_max_speed("NaNK"), Err(ParseSpeedError::NotPositive));
    }

    #[test]
    fn test_multibyte_unit_does_not_panic() {
        assert_eq!(
            parse_max_speed("5µ"),
            Err(ParseSpeedError::UnsupportedUnit('µ'))
        );
    }
}

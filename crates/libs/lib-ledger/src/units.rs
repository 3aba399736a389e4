//! # Smallest-Unit Conversion
//!
//! Conversions between display amounts and the smallest native unit (wei),
//! related by a fixed 10^18 scale.
//!
//! User input is parsed as a decimal string rather than through `f64` so the
//! value dispatched to the wallet is exact; the display direction goes
//! through `f64`, which is only ever used for rendering.

use crate::error::{LedgerError, Result};

/// Smallest units per display unit.
pub const WEI_PER_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Number of fractional digits the smallest unit can represent.
const DECIMALS: u32 = 18;

/// Parse a display amount (e.g. `"2.5"`) into the smallest unit.
///
/// Accepts a plain decimal with at most 18 fractional digits. Rejects empty
/// input, signs, zero, and anything that is not `digits[.digits]`.
///
/// # Examples
///
/// ```rust
/// use lib_ledger::units::{parse_amount, WEI_PER_TOKEN};
///
/// assert_eq!(parse_amount("1").unwrap(), WEI_PER_TOKEN);
/// assert_eq!(parse_amount("0.5").unwrap(), WEI_PER_TOKEN / 2);
/// assert!(parse_amount("-1").is_err());
/// ```
pub fn parse_amount(display: &str) -> Result<u128> {
    let trimmed = display.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidInput("amount cannot be empty".to_string()));
    }

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid(trimmed));
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid(trimmed));
    }
    if frac_part.len() > DECIMALS as usize {
        return Err(LedgerError::InvalidInput(format!(
            "amount supports at most {} decimal places",
            DECIMALS
        )));
    }

    let int_value: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| invalid(trimmed))?
    };
    let frac_value: u128 = if frac_part.is_empty() {
        0
    } else {
        let padded: u128 = frac_part.parse().map_err(|_| invalid(trimmed))?;
        padded * 10u128.pow(DECIMALS - frac_part.len() as u32)
    };

    let wei = int_value
        .checked_mul(WEI_PER_TOKEN)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(|| LedgerError::InvalidInput("amount is too large".to_string()))?;

    if wei == 0 {
        return Err(LedgerError::InvalidInput("amount must be positive".to_string()));
    }

    Ok(wei)
}

/// Convert a smallest-unit amount to display units for rendering.
///
/// # Examples
///
/// ```rust
/// use lib_ledger::units::to_display_amount;
///
/// assert_eq!(to_display_amount(2_000_000_000_000_000_000), 2.0);
/// ```
pub fn to_display_amount(wei: u128) -> f64 {
    wei as f64 / WEI_PER_TOKEN as f64
}

fn invalid(input: &str) -> LedgerError {
    LedgerError::InvalidInput(format!("'{}' is not a valid amount", input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(parse_amount("1").unwrap(), WEI_PER_TOKEN);
        assert_eq!(parse_amount("2.5").unwrap(), 2_500_000_000_000_000_000);
        assert_eq!(parse_amount(".5").unwrap(), 500_000_000_000_000_000);
        assert_eq!(parse_amount("0.000000000000000001").unwrap(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for bad in ["", " ", ".", "abc", "-1", "+1", "1.2.3", "1e18", "0", "0.0"] {
            let err = parse_amount(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "input: {:?}", bad);
        }
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        assert!(parse_amount("0.0000000000000000001").is_err());
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for display in ["1", "2.5", "0.1", "123456.789", "0.000001"] {
            let wei = parse_amount(display).unwrap();
            let back = to_display_amount(wei);
            let original: f64 = display.parse().unwrap();
            assert!(
                (back - original).abs() < 1e-9,
                "{} -> {} -> {}",
                display,
                wei,
                back
            );
        }
    }
}

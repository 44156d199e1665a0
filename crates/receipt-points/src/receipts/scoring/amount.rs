use std::str::FromStr;

use rust_decimal::Decimal;

use super::ScoringError;

/// Parses a currency string of the form `<digits>.<two digits>`.
///
/// Signs, exponents, separators, and surrounding whitespace are rejected rather than
/// normalised, so the value scored is always the value written on the receipt. The
/// returned amount always has a scale of 2; its mantissa is the amount in cents.
pub(crate) fn parse_amount(field: &str, raw: &str) -> Result<Decimal, ScoringError> {
    let invalid = || ScoringError::InvalidAmount {
        field: field.to_string(),
        value: raw.to_string(),
    };

    let (dollars, cents) = raw.split_once('.').ok_or_else(invalid)?;
    let well_formed = !dollars.is_empty()
        && dollars.bytes().all(|b| b.is_ascii_digit())
        && cents.len() == 2
        && cents.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    // Amounts too wide for 96 bits come back with their cents rounded away.
    let amount = Decimal::from_str(raw).map_err(|_| invalid())?;
    if amount.scale() != 2 {
        return Err(invalid());
    }
    Ok(amount)
}

//! Integer cent amounts and their dollar rendering.

use std::fmt;

/// Amounts are whole cents, 1/100 of the display unit.
pub type Cents = i64;

const CURRENCY_SYMBOL: &str = "$";
const MINOR_UNITS: u32 = 2;
const CENTS_PER_UNIT: u64 = 100;

/// Renders cents as `$d.dd`, with any sign in front of the symbol: `-$5.00`.
pub fn format_cents(cents: Cents) -> String {
    let magnitude = cents.unsigned_abs();
    let sign = if cents < 0 { "-" } else { "" };
    format!(
        "{sign}{CURRENCY_SYMBOL}{}.{:0width$}",
        magnitude / CENTS_PER_UNIT,
        magnitude % CENTS_PER_UNIT,
        width = MINOR_UNITS as usize
    )
}

/// Parses decimal dollar text (`12`, `12.5`, `12.50`, `$12.50`) into cents.
///
/// Signs are kept so callers can reject negatives with their own error.
pub fn parse_cents(input: &str) -> Result<Cents, AmountParseError> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let unsigned = unsigned.strip_prefix(CURRENCY_SYMBOL).unwrap_or(unsigned);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let digits_only = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
    if whole.is_empty() || !digits_only(whole) || !digits_only(fraction) {
        return Err(AmountParseError::new(input));
    }
    if fraction.len() > MINOR_UNITS as usize {
        return Err(AmountParseError::new(input));
    }

    let whole: Cents = whole.parse().map_err(|_| AmountParseError::new(input))?;
    let mut minor: Cents = 0;
    if !fraction.is_empty() {
        let scale = 10_i64.pow(MINOR_UNITS - fraction.len() as u32);
        minor = fraction.parse::<Cents>().map_err(|_| AmountParseError::new(input))? * scale;
    }

    let cents = whole
        .checked_mul(CENTS_PER_UNIT as Cents)
        .and_then(|value| value.checked_add(minor))
        .ok_or_else(|| AmountParseError::new(input))?;
    Ok(if negative { -cents } else { cents })
}

/// Raised when amount text is not a decimal with at most two fraction digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountParseError {
    input: String,
}

impl AmountParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid amount (expected e.g. 12.50)", self.input)
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_cents_to_two_digits() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(300_000), "$3000.00");
        assert_eq!(format_cents(12_345), "$123.45");
    }

    #[test]
    fn negative_values_keep_sign_before_symbol() {
        assert_eq!(format_cents(-500), "-$5.00");
        assert_eq!(format_cents(-7), "-$0.07");
        assert_eq!(format_cents(Cents::MIN), "-$92233720368547758.08");
    }

    #[test]
    fn parses_decimal_amounts() {
        assert_eq!(parse_cents("12"), Ok(1_200));
        assert_eq!(parse_cents("12.5"), Ok(1_250));
        assert_eq!(parse_cents("$0.07"), Ok(7));
        assert_eq!(parse_cents("-3.00"), Ok(-300));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for bad in ["", "abc", "1.234", ".50", "1,00", "1.-5"] {
            assert!(parse_cents(bad).is_err(), "accepted {bad:?}");
        }
    }
}

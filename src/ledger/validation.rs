//! Precondition checks shared by the ledger mutators.

use crate::{
    currency::Cents,
    errors::{LedgerError, Result},
};

/// Length of an ISO `YYYY-MM-DD` date string.
pub const DATE_LENGTH: usize = 10;

const DATE_DASH_POSITIONS: [usize; 2] = [4, 7];

/// Rejects categories that are empty or contain only whitespace.
///
/// Accepted names are stored exactly as given; matching is case-sensitive.
pub fn validate_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(LedgerError::EmptyCategory);
    }
    Ok(())
}

/// Checks the `YYYY-MM-DD` shape: ten ASCII characters with dashes at
/// offsets 4 and 7.
///
/// Month and day ranges are not checked.
pub fn validate_date(date: &str) -> Result<()> {
    let bytes = date.as_bytes();
    let shaped = date.is_ascii()
        && bytes.len() == DATE_LENGTH
        && DATE_DASH_POSITIONS
            .iter()
            .all(|&position| bytes[position] == b'-');
    if shaped {
        Ok(())
    } else {
        Err(LedgerError::MalformedDate(date.to_string()))
    }
}

pub(crate) fn validate_amount(field: &'static str, value: Cents) -> Result<Cents> {
    if value < 0 {
        return Err(LedgerError::NegativeAmount { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_category_is_rejected() {
        assert_eq!(validate_category("   "), Err(LedgerError::EmptyCategory));
        assert_eq!(validate_category(""), Err(LedgerError::EmptyCategory));
        assert!(validate_category(" Food ").is_ok());
    }

    #[test]
    fn date_shape_is_checked_but_not_calendar() {
        assert!(validate_date("2025-11-01").is_ok());
        assert!(validate_date("2025-13-45").is_ok());
        assert!(validate_date("2025/11/01").is_err());
        assert!(validate_date("2025-1-01").is_err());
        assert!(validate_date("").is_err());
        assert!(validate_date("20é-11-01").is_err());
    }

    #[test]
    fn negative_amount_names_the_field() {
        let err = validate_amount("limit", -3).unwrap_err();
        assert_eq!(
            err,
            LedgerError::NegativeAmount {
                field: "limit",
                value: -3
            }
        );
    }
}

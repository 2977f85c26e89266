//! Validated numeric input boundary
//!
//! Every numeric form field in the system (quantities, prices, discounts,
//! offer percentages) is parsed through this module. The policy is uniform:
//! non-numeric or out-of-range text is rejected at the boundary — it never
//! reaches a draft as zero or any other substitute value.

use rust_decimal::Decimal;
use std::borrow::Cow;
use std::str::FromStr;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Errors produced by the input boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field}: '{raw}' is not a number")]
    NotNumeric { field: &'static str, raw: String },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} must be between 0 and 100")]
    PercentOutOfRange { field: &'static str },
}

/// Parses a whole non-negative quantity from raw form text.
pub fn parse_quantity(field: &'static str, raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    trimmed.parse::<u32>().map_err(|_| {
        // u32 parsing already rejects signs, so "-3" and "abc" fail the same way
        InputError::NotNumeric {
            field,
            raw: raw.to_string(),
        }
    })
}

/// Parses a non-negative decimal amount from raw form text.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<Decimal, InputError> {
    let trimmed = raw.trim();
    let value = Decimal::from_str(trimmed).map_err(|_| InputError::NotNumeric {
        field,
        raw: raw.to_string(),
    })?;
    if value.is_sign_negative() {
        return Err(InputError::Negative { field });
    }
    Ok(value)
}

/// Parses a percentage in the range 0..=100 from raw form text.
pub fn parse_percent(field: &'static str, raw: &str) -> Result<Decimal, InputError> {
    let value = parse_amount(field, raw)?;
    if value > Decimal::new(100, 0) {
        return Err(InputError::PercentOutOfRange { field });
    }
    Ok(value)
}

/// Validates a 10-digit mobile number, shared by every form that captures one.
pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("mobile");
        error.message = Some(Cow::Borrowed("please enter a valid 10-digit mobile number"));
        Err(error)
    }
}

/// Flattens validator output into user-facing messages, one per violation.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages("", errors, &mut messages);
    messages
}

fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    match &error.message {
                        Some(message) => out.push(message.to_string()),
                        None => out.push(format!("{path} is invalid")),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_quantity_accepts_digits() {
        assert_eq!(parse_quantity("quantity", "3"), Ok(3));
        assert_eq!(parse_quantity("quantity", " 12 "), Ok(12));
    }

    #[test]
    fn test_parse_quantity_rejects_text() {
        assert_eq!(
            parse_quantity("quantity", "abc"),
            Err(InputError::NotNumeric {
                field: "quantity",
                raw: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_parse_quantity_rejects_negative() {
        assert!(parse_quantity("quantity", "-2").is_err());
    }

    #[test]
    fn test_parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("price", "500.50"), Ok(dec!(500.50)));
    }

    #[test]
    fn test_parse_amount_rejects_text_and_negatives() {
        assert!(matches!(
            parse_amount("price", "abc"),
            Err(InputError::NotNumeric { .. })
        ));
        assert_eq!(
            parse_amount("price", "-1"),
            Err(InputError::Negative { field: "price" })
        );
    }

    #[test]
    fn test_parse_percent_bounds() {
        assert_eq!(parse_percent("offer", "15"), Ok(dec!(15)));
        assert_eq!(
            parse_percent("offer", "150"),
            Err(InputError::PercentOutOfRange { field: "offer" })
        );
    }

    #[test]
    fn test_validate_mobile() {
        assert!(validate_mobile("9876543210").is_ok());
        assert!(validate_mobile("98765").is_err());
        assert!(validate_mobile("98765432ab").is_err());
        assert!(validate_mobile("").is_err());
    }
}

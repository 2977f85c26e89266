//! Pharmacy domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the pharmacy domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PharmacyError {
    /// Offer percentage was outside 0..=100
    #[error("Offer percentage {0} must be between 0 and 100")]
    OfferOutOfRange(Decimal),

    /// MRP must be a positive amount
    #[error("MRP must be greater than zero")]
    NonPositiveMrp,
}

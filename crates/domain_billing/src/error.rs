//! Billing domain errors

use thiserror::Error;

use core_kernel::InputError;

/// Errors that can occur in the billing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// A form referenced a line item field that does not exist
    #[error("Unknown bill item field: {0}")]
    UnknownField(String),

    /// Raw form input failed numeric parsing
    #[error(transparent)]
    Input(#[from] InputError),
}

//! Registry domain errors

use thiserror::Error;

/// Errors that can occur in the registry domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A specialization string did not match any known specialization
    #[error("Unknown specialization: {0}")]
    UnknownSpecialization(String),

    /// A patient draft was submitted without an appointment date
    #[error("Appointment date is required")]
    MissingAppointment,
}

//! Ports for the record data source boundary
//!
//! Every screen in the admin console reads and mutates its records through
//! the same four-operation contract: fetch all, create, update, delete. The
//! contract is a port trait so the in-memory simulated sources used today can
//! be swapped for a networked backend without touching any caller.
//!
//! ```rust,ignore
//! // In infra_mock - simulated adapter
//! #[async_trait]
//! impl RecordSource<Doctor> for MockDoctorSource { ... }
//!
//! // In a future infra_http - real adapter over the clinic API
//! impl RecordSource<Doctor> for HttpDoctorSource { ... }
//! ```

use async_trait::async_trait;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Error type for port operations
///
/// A unified error type all source implementations must use, so stores can
/// classify failures the same way regardless of the adapter behind them.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested record was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout { operation: String, duration_ms: u64 },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Connection { .. } | PortError::Timeout { .. })
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all data source adapters
///
/// Adapters must be thread-safe so they can be shared behind an `Arc` and
/// used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// A business entity owned by a record store
///
/// Each record type pairs with a draft type - the transient edit buffer a
/// form works on. A draft copies scalar fields at edit-open time; it never
/// aliases the stored record.
pub trait Record: Clone + Send + Sync + 'static {
    /// The typed identifier for this record
    type Id: Copy + Eq + Hash + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// The edit-buffer shape; `Default` gives create-mode field defaults
    type Draft: Clone + Default + Send + Sync + 'static;

    /// Lowercase entity name used in notifications and log fields
    const KIND: &'static str;

    /// Returns this record's identifier
    fn id(&self) -> Self::Id;

    /// Seeds a draft from this record's current field values (edit mode)
    fn draft(&self) -> Self::Draft;
}

/// The four-operation data source contract
///
/// All operations are async: real backends go over the network, and the
/// simulated sources sleep to stand in for it. `update` and `delete` of a
/// missing id must report `PortError::NotFound` rather than succeed
/// silently.
#[async_trait]
pub trait RecordSource<R: Record>: DomainPort {
    /// Retrieves every record, in insertion order
    async fn fetch_all(&self) -> Result<Vec<R>, PortError>;

    /// Creates a record from a draft, assigning a fresh identifier
    async fn create(&self, draft: R::Draft) -> Result<R, PortError>;

    /// Replaces the mutable fields of the record with the given id,
    /// leaving its identity and creation-only fields untouched
    async fn update(&self, id: R::Id, draft: R::Draft) -> Result<R, PortError>;

    /// Removes the record with the given id
    async fn delete(&self, id: R::Id) -> Result<(), PortError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Doctor", "DOC-123");
        assert!(error.is_not_found());
        assert!(!error.is_transient());
        assert!(error.to_string().contains("Doctor"));
        assert!(error.to_string().contains("DOC-123"));
    }

    #[test]
    fn test_port_error_transient() {
        let timeout = PortError::Timeout {
            operation: "fetch_all".to_string(),
            duration_ms: 5000,
        };
        assert!(timeout.is_transient());

        let connection = PortError::connection("socket closed");
        assert!(connection.is_transient());

        let validation = PortError::validation("Invalid mobile number");
        assert!(!validation.is_transient());
    }
}

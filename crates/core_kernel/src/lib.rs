//! Core Kernel - Foundational types and utilities for the clinic admin system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers for clinic records
//! - The data source port contract shared by every record store
//! - The validated numeric input boundary for form fields

pub mod money;
pub mod identifiers;
pub mod input;
pub mod ports;

pub use money::{Money, Currency, Rate, MoneyError};
pub use identifiers::{DoctorId, PatientId, MedicineId, BillId, BillItemId};
pub use input::{InputError, parse_quantity, parse_amount, parse_percent, validation_messages};
pub use ports::{PortError, DomainPort, Record, RecordSource};

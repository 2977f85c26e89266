//! Mock Infrastructure - simulated data sources
//!
//! Every adapter here implements the four-operation [`core_kernel::RecordSource`]
//! contract against an in-memory, insertion-ordered list, sleeping for a
//! configurable simulated latency before each call resolves - the stand-in
//! for a network round trip. A one-shot failure switch exercises the
//! operation-failure path without a real backend.
//!
//! Seed constructors provide the sample data the demo console boots with.

pub mod latency;
pub mod doctors;
pub mod patients;
pub mod pharmacy;
pub mod billing;

pub use latency::SimulatedLatency;
pub use doctors::{sample_doctors, MockDoctorSource};
pub use patients::{sample_patients, MockPatientSource};
pub use pharmacy::{sample_medicines, MockMedicineSource};
pub use billing::{sample_bills, MockBillSource};

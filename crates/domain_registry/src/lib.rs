//! Registry Domain - the people the clinic works with
//!
//! This crate defines the doctor and patient records managed by the admin
//! console, their transient drafts, and the validation rules the screens
//! apply before anything reaches a store.

pub mod doctor;
pub mod patient;
pub mod error;

pub use doctor::{Doctor, DoctorDraft, Specialization};
pub use patient::{Patient, PatientDraft};
pub use error::RegistryError;

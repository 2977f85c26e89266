//! Patient records
//!
//! A patient carries contact details, the appointment slot they booked, the
//! attending doctor, and the presenting problem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::input::validate_mobile;
use core_kernel::{PatientId, Record};

use crate::error::RegistryError;

/// A registered patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identifier
    pub id: PatientId,
    /// Full name
    pub name: String,
    /// 10-digit mobile number
    pub mobile: String,
    /// City of residence
    pub city: String,
    /// Street address
    pub address: String,
    /// Booked appointment slot
    pub appointment_at: DateTime<Utc>,
    /// Attending doctor's name
    pub doctor: String,
    /// Presenting problem as captured at registration
    pub problem: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    /// Creates a patient from a draft.
    ///
    /// Fails when the draft has no appointment slot; validation normally
    /// catches that earlier, this is the data-source-side guard.
    pub fn new(id: PatientId, draft: PatientDraft) -> Result<Self, RegistryError> {
        let appointment_at = draft.appointment_at.ok_or(RegistryError::MissingAppointment)?;
        let now = Utc::now();
        Ok(Self {
            id,
            name: draft.name,
            mobile: draft.mobile,
            city: draft.city,
            address: draft.address,
            appointment_at,
            doctor: draft.doctor,
            problem: draft.problem,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the mutable fields from a draft, leaving identity and the
    /// creation timestamp untouched
    pub fn apply_draft(&mut self, draft: PatientDraft) -> Result<(), RegistryError> {
        self.appointment_at = draft.appointment_at.ok_or(RegistryError::MissingAppointment)?;
        self.name = draft.name;
        self.mobile = draft.mobile;
        self.city = draft.city;
        self.address = draft.address;
        self.doctor = draft.doctor;
        self.problem = draft.problem;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Record for Patient {
    type Id = PatientId;
    type Draft = PatientDraft;
    const KIND: &'static str = "patient";

    fn id(&self) -> PatientId {
        self.id
    }

    fn draft(&self) -> PatientDraft {
        PatientDraft {
            name: self.name.clone(),
            mobile: self.mobile.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            appointment_at: Some(self.appointment_at),
            doctor: self.doctor.clone(),
            problem: self.problem.clone(),
        }
    }
}

/// Edit buffer for the patient form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PatientDraft {
    #[validate(length(min = 1, message = "Please enter patient name"))]
    pub name: String,
    #[validate(custom(function = validate_mobile))]
    pub mobile: String,
    #[validate(length(min = 1, message = "Please enter city"))]
    pub city: String,
    #[validate(length(min = 1, message = "Please enter address"))]
    pub address: String,
    #[validate(required(message = "Please pick an appointment date"))]
    pub appointment_at: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "Please select a doctor"))]
    pub doctor: String,
    #[validate(length(min = 1, message = "Please describe the patient problem"))]
    pub problem: String,
}

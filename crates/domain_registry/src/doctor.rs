//! Doctor records
//!
//! A doctor belongs to a clinic, carries a specialization and years of
//! experience, and has an active flag the console toggles directly - no
//! confirmation, no simulated round trip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use core_kernel::input::validate_mobile;
use core_kernel::{DoctorId, Record};

use crate::error::RegistryError;

/// Medical specializations offered by the clinic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialization {
    #[default]
    General,
    Cardiology,
    Dermatology,
    Orthopedics,
    Pediatrics,
    Neurology,
    Psychiatry,
    Gynecology,
    Ophthalmology,
    Dentistry,
}

impl Specialization {
    /// Human-readable label shown in tables and pick lists
    pub fn label(&self) -> &'static str {
        match self {
            Specialization::General => "General Physician",
            Specialization::Cardiology => "Cardiology",
            Specialization::Dermatology => "Dermatology",
            Specialization::Orthopedics => "Orthopedics",
            Specialization::Pediatrics => "Pediatrics",
            Specialization::Neurology => "Neurology",
            Specialization::Psychiatry => "Psychiatry",
            Specialization::Gynecology => "Gynecology",
            Specialization::Ophthalmology => "Ophthalmology",
            Specialization::Dentistry => "Dentistry",
        }
    }

    /// All specializations, in pick-list order
    pub fn all() -> &'static [Specialization] {
        &[
            Specialization::General,
            Specialization::Cardiology,
            Specialization::Dermatology,
            Specialization::Orthopedics,
            Specialization::Pediatrics,
            Specialization::Neurology,
            Specialization::Psychiatry,
            Specialization::Gynecology,
            Specialization::Ophthalmology,
            Specialization::Dentistry,
        ]
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Specialization {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Specialization::General),
            "cardiology" => Ok(Specialization::Cardiology),
            "dermatology" => Ok(Specialization::Dermatology),
            "orthopedics" => Ok(Specialization::Orthopedics),
            "pediatrics" => Ok(Specialization::Pediatrics),
            "neurology" => Ok(Specialization::Neurology),
            "psychiatry" => Ok(Specialization::Psychiatry),
            "gynecology" => Ok(Specialization::Gynecology),
            "ophthalmology" => Ok(Specialization::Ophthalmology),
            "dentistry" => Ok(Specialization::Dentistry),
            other => Err(RegistryError::UnknownSpecialization(other.to_string())),
        }
    }
}

/// A doctor on the clinic roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique identifier
    pub id: DoctorId,
    /// Full name
    pub name: String,
    /// Clinic the doctor practices at
    pub clinic_name: String,
    /// 10-digit mobile number
    pub mobile: String,
    /// Medical specialization
    pub specialization: Specialization,
    /// Years of experience
    pub experience_years: u32,
    /// Whether the doctor currently accepts appointments
    pub is_active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Doctor {
    /// Creates a doctor from a draft; new doctors start active
    pub fn new(id: DoctorId, draft: DoctorDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            clinic_name: draft.clinic_name,
            mobile: draft.mobile,
            specialization: draft.specialization,
            experience_years: draft.experience_years,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the mutable fields from a draft, leaving identity,
    /// active flag, and creation timestamp untouched
    pub fn apply_draft(&mut self, draft: DoctorDraft) {
        self.name = draft.name;
        self.clinic_name = draft.clinic_name;
        self.mobile = draft.mobile;
        self.specialization = draft.specialization;
        self.experience_years = draft.experience_years;
        self.updated_at = Utc::now();
    }

    /// Sets the active flag
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.updated_at = Utc::now();
    }
}

impl Record for Doctor {
    type Id = DoctorId;
    type Draft = DoctorDraft;
    const KIND: &'static str = "doctor";

    fn id(&self) -> DoctorId {
        self.id
    }

    fn draft(&self) -> DoctorDraft {
        DoctorDraft {
            name: self.name.clone(),
            clinic_name: self.clinic_name.clone(),
            mobile: self.mobile.clone(),
            specialization: self.specialization,
            experience_years: self.experience_years,
        }
    }
}

/// Edit buffer for the doctor form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DoctorDraft {
    #[validate(length(min = 1, message = "Please enter doctor's name"))]
    pub name: String,
    #[validate(length(min = 1, message = "Please enter clinic name"))]
    pub clinic_name: String,
    #[validate(custom(function = validate_mobile))]
    pub mobile: String,
    pub specialization: Specialization,
    #[validate(range(min = 1, max = 40, message = "Please select years of experience"))]
    pub experience_years: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> DoctorDraft {
        DoctorDraft {
            name: "Dr. John Smith".to_string(),
            clinic_name: "Wellness Clinic".to_string(),
            mobile: "9876543210".to_string(),
            specialization: Specialization::Cardiology,
            experience_years: 15,
        }
    }

    #[test]
    fn test_new_doctor_starts_active() {
        let doctor = Doctor::new(DoctorId::new_v7(), valid_draft());
        assert!(doctor.is_active);
        assert_eq!(doctor.specialization, Specialization::Cardiology);
    }

    #[test]
    fn test_apply_draft_keeps_identity_and_active_flag() {
        let mut doctor = Doctor::new(DoctorId::new_v7(), valid_draft());
        let id = doctor.id;
        doctor.set_active(false);

        let mut draft = doctor.draft();
        draft.name = "Dr. Jane Smith".to_string();
        doctor.apply_draft(draft);

        assert_eq!(doctor.id, id);
        assert_eq!(doctor.name, "Dr. Jane Smith");
        assert!(!doctor.is_active);
    }

    #[test]
    fn test_draft_round_trip() {
        let doctor = Doctor::new(DoctorId::new_v7(), valid_draft());
        assert_eq!(doctor.draft(), valid_draft());
    }

    #[test]
    fn test_valid_draft_passes_validation() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_missing_name_fails_validation() {
        let mut draft = valid_draft();
        draft.name = String::new();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_short_mobile_fails_validation() {
        let mut draft = valid_draft();
        draft.mobile = "12345".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_zero_experience_fails_validation() {
        let mut draft = valid_draft();
        draft.experience_years = 0;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_specialization_parse_and_label() {
        let parsed: Specialization = "cardiology".parse().unwrap();
        assert_eq!(parsed, Specialization::Cardiology);
        assert_eq!(parsed.label(), "Cardiology");
        assert_eq!(
            Specialization::General.label(),
            "General Physician"
        );
        assert!(matches!(
            "astrology".parse::<Specialization>(),
            Err(RegistryError::UnknownSpecialization(_))
        ));
    }

    #[test]
    fn test_specialization_serializes_lowercase() {
        let json = serde_json::to_string(&Specialization::Pediatrics).unwrap();
        assert_eq!(json, "\"pediatrics\"");
    }
}

//! Manage Patients screen

use domain_registry::{Doctor, Patient};
use record_store::RecordStore;

use super::Screen;

/// The patients management screen
pub type PatientsScreen = Screen<Patient>;

impl Screen<Patient> {
    /// Names for the patient form's doctor pick list - active doctors only
    pub fn doctor_options(doctors: &RecordStore<Doctor>) -> Vec<String> {
        doctors
            .snapshot()
            .iter()
            .filter(|doctor| doctor.is_active)
            .map(|doctor| doctor.name.clone())
            .collect()
    }
}

//! Simulated doctor data source

use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{DoctorId, DomainPort, PortError, RecordSource};
use domain_registry::{Doctor, DoctorDraft, Specialization};

use crate::latency::SimulatedLatency;

/// In-memory doctor source with simulated latency
pub struct MockDoctorSource {
    records: RwLock<Vec<Doctor>>,
    latency: SimulatedLatency,
    fail_next: Mutex<Option<String>>,
}

impl MockDoctorSource {
    /// Creates an empty source
    pub fn new(latency: SimulatedLatency) -> Self {
        Self::with_records(latency, Vec::new())
    }

    /// Creates a source over the given records
    pub fn with_records(latency: SimulatedLatency, records: Vec<Doctor>) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
            fail_next: Mutex::new(None),
        }
    }

    /// Creates a source seeded with the sample roster
    pub fn seeded(latency: SimulatedLatency) -> Self {
        Self::with_records(latency, sample_doctors())
    }

    /// Makes the next call fail with a connection error
    pub fn fail_next(&self, reason: impl Into<String>) {
        *self.fail_next.lock().expect("fail flag poisoned") = Some(reason.into());
    }

    fn take_failure(&self) -> Result<(), PortError> {
        let injected = self.fail_next.lock().expect("fail flag poisoned").take();
        match injected {
            Some(reason) => Err(PortError::connection(reason)),
            None => Ok(()),
        }
    }
}

impl DomainPort for MockDoctorSource {}

#[async_trait]
impl RecordSource<Doctor> for MockDoctorSource {
    async fn fetch_all(&self) -> Result<Vec<Doctor>, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let records = self.records.read().await;
        debug!(count = records.len(), "mock doctor fetch");
        Ok(records.clone())
    }

    async fn create(&self, draft: DoctorDraft) -> Result<Doctor, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let doctor = Doctor::new(DoctorId::new_v7(), draft);
        debug!(id = %doctor.id, "mock doctor create");
        self.records.write().await.push(doctor.clone());
        Ok(doctor)
    }

    async fn update(&self, id: DoctorId, draft: DoctorDraft) -> Result<Doctor, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let mut records = self.records.write().await;
        let doctor = records
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| PortError::not_found("Doctor", id))?;
        doctor.apply_draft(draft);
        debug!(%id, "mock doctor update");
        Ok(doctor.clone())
    }

    async fn delete(&self, id: DoctorId) -> Result<(), PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|d| d.id != id);
        if records.len() == before {
            return Err(PortError::not_found("Doctor", id));
        }
        debug!(%id, "mock doctor delete");
        Ok(())
    }
}

/// The sample roster the demo console boots with
pub fn sample_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(
            DoctorId::new_v7(),
            DoctorDraft {
                name: "Dr. John Smith".to_string(),
                clinic_name: "Wellness Clinic".to_string(),
                mobile: "9876543210".to_string(),
                specialization: Specialization::Cardiology,
                experience_years: 15,
            },
        ),
        Doctor::new(
            DoctorId::new_v7(),
            DoctorDraft {
                name: "Dr. Sarah Johnson".to_string(),
                clinic_name: "City Health Center".to_string(),
                mobile: "9876543211".to_string(),
                specialization: Specialization::Pediatrics,
                experience_years: 8,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MockDoctorSource {
        MockDoctorSource::seeded(SimulatedLatency::none())
    }

    #[tokio::test]
    async fn test_fetch_returns_seed_in_order() {
        let doctors = source().fetch_all().await.unwrap();
        assert_eq!(doctors.len(), 2);
        assert_eq!(doctors[0].name, "Dr. John Smith");
        assert_eq!(doctors[1].name, "Dr. Sarah Johnson");
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let source = source();
        let existing: Vec<DoctorId> = source
            .fetch_all()
            .await
            .unwrap()
            .iter()
            .map(|d| d.id)
            .collect();

        let created = source
            .create(DoctorDraft {
                name: "Dr. Priya Patel".to_string(),
                clinic_name: "Lakeside Clinic".to_string(),
                mobile: "9876500000".to_string(),
                specialization: Specialization::Dermatology,
                experience_years: 5,
            })
            .await
            .unwrap();

        assert!(!existing.contains(&created.id));
        assert_eq!(source.fetch_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_missing_doctor_is_not_found() {
        let result = source()
            .update(DoctorId::new_v7(), DoctorDraft::default())
            .await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let source = source();
        let id = source.fetch_all().await.unwrap()[0].id;
        source.delete(id).await.unwrap();
        assert_eq!(source.fetch_all().await.unwrap().len(), 1);
        assert!(source.delete(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_fail_next_only_fails_once() {
        let source = source();
        source.fail_next("wire unplugged");
        assert!(source.fetch_all().await.unwrap_err().is_transient());
        assert!(source.fetch_all().await.is_ok());
    }
}

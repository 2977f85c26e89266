//! Simulated patient data source

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Mutex;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{DomainPort, PatientId, PortError, RecordSource};
use domain_registry::{Patient, PatientDraft};

use crate::latency::SimulatedLatency;

/// In-memory patient source with simulated latency
pub struct MockPatientSource {
    records: RwLock<Vec<Patient>>,
    latency: SimulatedLatency,
    fail_next: Mutex<Option<String>>,
}

impl MockPatientSource {
    /// Creates an empty source
    pub fn new(latency: SimulatedLatency) -> Self {
        Self::with_records(latency, Vec::new())
    }

    /// Creates a source over the given records
    pub fn with_records(latency: SimulatedLatency, records: Vec<Patient>) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
            fail_next: Mutex::new(None),
        }
    }

    /// Creates a source seeded with the sample patients
    pub fn seeded(latency: SimulatedLatency) -> Self {
        Self::with_records(latency, sample_patients())
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

impl DomainPort for MockPatientSource {}

#[async_trait]
impl RecordSource<Patient> for MockPatientSource {
    async fn fetch_all(&self) -> Result<Vec<Patient>, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let records = self.records.read().await;
        debug!(count = records.len(), "mock patient fetch");
        Ok(records.clone())
    }

    async fn create(&self, draft: PatientDraft) -> Result<Patient, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let patient = Patient::new(PatientId::new_v7(), draft)
            .map_err(|err| PortError::validation(err.to_string()))?;
        debug!(id = %patient.id, "mock patient create");
        self.records.write().await.push(patient.clone());
        Ok(patient)
    }

    async fn update(&self, id: PatientId, draft: PatientDraft) -> Result<Patient, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let mut records = self.records.write().await;
        let patient = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PortError::not_found("Patient", id))?;
        patient
            .apply_draft(draft)
            .map_err(|err| PortError::validation(err.to_string()))?;
        debug!(%id, "mock patient update");
        Ok(patient.clone())
    }

    async fn delete(&self, id: PatientId) -> Result<(), PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|p| p.id != id);
        if records.len() == before {
            return Err(PortError::not_found("Patient", id));
        }
        debug!(%id, "mock patient delete");
        Ok(())
    }
}

/// The sample patients the demo console boots with; appointments are booked
/// over the next few days so the list always looks current
pub fn sample_patients() -> Vec<Patient> {
    let now = Utc::now();
    let seed = [
        (
            "John Doe",
            "9876543210",
            "New York",
            "123 Main St, NY",
            Duration::days(1),
            "Dr. Smith",
            "Regular checkup",
        ),
        (
            "Jane Smith",
            "8765432109",
            "Los Angeles",
            "456 Oak Ave, LA",
            Duration::days(2),
            "Dr. Johnson",
            "Fever and cold",
        ),
        (
            "Robert Wilson",
            "7654321098",
            "Chicago",
            "789 Pine Rd, CH",
            Duration::days(3),
            "Dr. Williams",
            "Dental checkup",
        ),
    ];

    seed.into_iter()
        .map(
            |(name, mobile, city, address, offset, doctor, problem)| Patient {
                id: PatientId::new_v7(),
                name: name.to_string(),
                mobile: mobile.to_string(),
                city: city.to_string(),
                address: address.to_string(),
                appointment_at: now + offset,
                doctor: doctor.to_string(),
                problem: problem.to_string(),
                created_at: now,
                updated_at: now,
            },
        )
        .collect()
}

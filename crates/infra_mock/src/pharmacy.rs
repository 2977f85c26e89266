//! Simulated medicine data source

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal_macros::dec;
use std::sync::Mutex;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{Currency, DomainPort, MedicineId, Money, PortError, RecordSource};
use domain_pharmacy::{Medicine, MedicineDraft};

use crate::latency::SimulatedLatency;

/// In-memory medicine source with simulated latency
pub struct MockMedicineSource {
    records: RwLock<Vec<Medicine>>,
    latency: SimulatedLatency,
    fail_next: Mutex<Option<String>>,
}

impl MockMedicineSource {
    /// Creates an empty source
    pub fn new(latency: SimulatedLatency) -> Self {
        Self::with_records(latency, Vec::new())
    }

    /// Creates a source over the given records
    pub fn with_records(latency: SimulatedLatency, records: Vec<Medicine>) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
            fail_next: Mutex::new(None),
        }
    }

    /// Creates a source seeded with the sample shelf
    pub fn seeded(latency: SimulatedLatency) -> Self {
        Self::with_records(latency, sample_medicines())
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

impl DomainPort for MockMedicineSource {}

#[async_trait]
impl RecordSource<Medicine> for MockMedicineSource {
    async fn fetch_all(&self) -> Result<Vec<Medicine>, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let records = self.records.read().await;
        debug!(count = records.len(), "mock medicine fetch");
        Ok(records.clone())
    }

    async fn create(&self, draft: MedicineDraft) -> Result<Medicine, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let medicine = Medicine::new(MedicineId::new_v7(), draft)
            .map_err(|err| PortError::validation(err.to_string()))?;
        debug!(id = %medicine.id, "mock medicine create");
        self.records.write().await.push(medicine.clone());
        Ok(medicine)
    }

    async fn update(&self, id: MedicineId, draft: MedicineDraft) -> Result<Medicine, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let mut records = self.records.write().await;
        let medicine = records
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| PortError::not_found("Medicine", id))?;
        medicine
            .apply_draft(draft)
            .map_err(|err| PortError::validation(err.to_string()))?;
        debug!(%id, "mock medicine update");
        Ok(medicine.clone())
    }

    async fn delete(&self, id: MedicineId) -> Result<(), PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|m| m.id != id);
        if records.len() == before {
            return Err(PortError::not_found("Medicine", id));
        }
        debug!(%id, "mock medicine delete");
        Ok(())
    }
}

/// The sample shelf the demo console boots with
pub fn sample_medicines() -> Vec<Medicine> {
    let now = Utc::now();
    vec![
        Medicine {
            id: MedicineId::new_v7(),
            name: "Paracetamol".to_string(),
            mrp: Money::new(dec!(50.00), Currency::INR),
            offer_percent: dec!(10),
            stock: 100,
            created_at: now,
            updated_at: now,
        },
        Medicine {
            id: MedicineId::new_v7(),
            name: "Aspirin".to_string(),
            mrp: Money::new(dec!(75.00), Currency::INR),
            offer_percent: dec!(15),
            stock: 150,
            created_at: now,
            updated_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MockMedicineSource {
        MockMedicineSource::seeded(SimulatedLatency::none())
    }

    #[tokio::test]
    async fn test_seed_shelf() {
        let medicines = source().fetch_all().await.unwrap();
        assert_eq!(medicines.len(), 2);
        assert_eq!(medicines[0].name, "Paracetamol");
        assert_eq!(
            medicines[0].selling_price(),
            Money::new(dec!(45.00), Currency::INR)
        );
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let result = source()
            .create(MedicineDraft {
                name: "Free Sample".to_string(),
                mrp: Money::zero(Currency::INR),
                ..MedicineDraft::default()
            })
            .await;
        assert!(matches!(result.unwrap_err(), PortError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_adjusts_stock() {
        let source = source();
        let medicine = source.fetch_all().await.unwrap()[1].clone();

        let mut draft = core_kernel::Record::draft(&medicine);
        draft.stock = 120;
        let updated = source.update(medicine.id, draft).await.unwrap();

        assert_eq!(updated.stock, 120);
        assert_eq!(updated.id, medicine.id);
    }

    #[tokio::test]
    async fn test_injected_failure_is_transient() {
        let source = source();
        source.fail_next("gateway down");
        assert!(source.fetch_all().await.unwrap_err().is_transient());
    }
}

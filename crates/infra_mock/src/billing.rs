//! Simulated bill data source
//!
//! Bill numbers come from a monotonic counter, so two creates landing in the
//! same instant still get distinct numbers.

use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{BillId, Currency, DomainPort, Money, PortError, RecordSource};
use domain_billing::{Bill, BillDraft, BillItem, BillStatus};

use crate::latency::SimulatedLatency;

/// In-memory bill source with simulated latency and sequential bill numbers
pub struct MockBillSource {
    records: RwLock<Vec<Bill>>,
    latency: SimulatedLatency,
    next_number: AtomicU64,
    fail_next: Mutex<Option<String>>,
}

impl MockBillSource {
    /// Creates an empty source; the first bill is numbered BILL-001
    pub fn new(latency: SimulatedLatency) -> Self {
        Self::with_records(latency, Vec::new())
    }

    /// Creates a source over the given bills, continuing the number sequence
    pub fn with_records(latency: SimulatedLatency, records: Vec<Bill>) -> Self {
        let next_number = AtomicU64::new(records.len() as u64 + 1);
        Self {
            records: RwLock::new(records),
            latency,
            next_number,
            fail_next: Mutex::new(None),
        }
    }

    /// Creates a source seeded with the sample bills
    pub fn seeded(latency: SimulatedLatency) -> Self {
        Self::with_records(latency, sample_bills())
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

    fn next_bill_number(&self) -> String {
        let n = self.next_number.fetch_add(1, Ordering::SeqCst);
        format!("BILL-{n:03}")
    }
}

impl DomainPort for MockBillSource {}

#[async_trait]
impl RecordSource<Bill> for MockBillSource {
    async fn fetch_all(&self) -> Result<Vec<Bill>, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let records = self.records.read().await;
        debug!(count = records.len(), "mock bill fetch");
        Ok(records.clone())
    }

    async fn create(&self, draft: BillDraft) -> Result<Bill, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let bill = Bill::new(BillId::new_v7(), self.next_bill_number(), draft);
        debug!(id = %bill.id, number = %bill.bill_number, "mock bill create");
        self.records.write().await.push(bill.clone());
        Ok(bill)
    }

    async fn update(&self, id: BillId, draft: BillDraft) -> Result<Bill, PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let mut records = self.records.write().await;
        let bill = records
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| PortError::not_found("Bill", id))?;
        bill.apply_draft(draft);
        debug!(%id, "mock bill update");
        Ok(bill.clone())
    }

    async fn delete(&self, id: BillId) -> Result<(), PortError> {
        self.latency.wait().await;
        self.take_failure()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|b| b.id != id);
        if records.len() == before {
            return Err(PortError::not_found("Bill", id));
        }
        debug!(%id, "mock bill delete");
        Ok(())
    }
}

fn inr(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::INR)
}

/// The sample bills the demo console boots with
pub fn sample_bills() -> Vec<Bill> {
    let mut first = Bill::new(
        BillId::new_v7(),
        "BILL-001",
        BillDraft {
            patient_name: "John Doe".to_string(),
            patient_mobile: "9876543210".to_string(),
            items: vec![
                BillItem::new("Consultation", 1, inr(dec!(500))),
                BillItem::new("Blood Test", 1, inr(dec!(800))),
            ],
            discount: inr(dec!(100)),
        },
    );
    first.status = BillStatus::Paid;

    let second = Bill::new(
        BillId::new_v7(),
        "BILL-002",
        BillDraft {
            patient_name: "Jane Smith".to_string(),
            patient_mobile: "8765432109".to_string(),
            items: vec![
                BillItem::new("X-Ray", 1, inr(dec!(1200))),
                BillItem::new("Medicine", 2, inr(dec!(300))),
            ],
            discount: inr(dec!(200)),
        },
    );

    vec![first, second]
}

//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the clinic admin
//! system. Fixtures are deterministic so assertions stay predictable.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use uuid::Uuid;

use core_kernel::{BillId, Currency, DoctorId, MedicineId, Money, PatientId};
use domain_billing::{Bill, BillDraft, BillItem, BillStatus};
use domain_registry::{DoctorDraft, PatientDraft, Specialization};

/// The fixed timestamp every deterministic fixture hangs off
pub static FIXED_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 2, 20, 10, 30, 0).unwrap());

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A consultation fee
    pub fn consultation_fee() -> Money {
        Money::new(dec!(500.00), Currency::INR)
    }

    /// A standard small discount
    pub fn small_discount() -> Money {
        Money::new(dec!(100.00), Currency::INR)
    }

    /// Zero rupees
    pub fn zero() -> Money {
        Money::zero(Currency::INR)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic doctor ID for testing
    pub fn doctor_id() -> DoctorId {
        DoctorId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic patient ID for testing
    pub fn patient_id() -> PatientId {
        PatientId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic medicine ID for testing
    pub fn medicine_id() -> MedicineId {
        MedicineId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }

    /// Creates a deterministic bill ID for testing
    pub fn bill_id() -> BillId {
        BillId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440004").unwrap())
    }
}

/// Fixture for draft test data
pub struct DraftFixtures;

impl DraftFixtures {
    /// A complete, valid doctor draft
    pub fn doctor() -> DoctorDraft {
        DoctorDraft {
            name: "Dr. John Smith".to_string(),
            clinic_name: "Wellness Clinic".to_string(),
            mobile: "9876543210".to_string(),
            specialization: Specialization::Cardiology,
            experience_years: 15,
        }
    }

    /// A complete, valid patient draft
    pub fn patient() -> PatientDraft {
        PatientDraft {
            name: "John Doe".to_string(),
            mobile: "9876543210".to_string(),
            city: "New York".to_string(),
            address: "123 Main St, NY".to_string(),
            appointment_at: Some(*FIXED_TIME),
            doctor: "Dr. Smith".to_string(),
            problem: "Regular checkup".to_string(),
        }
    }

    /// The canonical consultation + blood test bill draft:
    /// subtotal 1300, discount 100, final amount 1200
    pub fn consultation_bill() -> BillDraft {
        BillDraft {
            patient_name: "John Doe".to_string(),
            patient_mobile: "9876543210".to_string(),
            items: vec![
                BillItem::new("Consultation", 1, MoneyFixtures::consultation_fee()),
                BillItem::new("Blood Test", 1, Money::new(dec!(800.00), Currency::INR)),
            ],
            discount: MoneyFixtures::small_discount(),
        }
    }
}

/// Fixture for finalized bills
pub struct BillFixtures;

impl BillFixtures {
    /// A paid bill built from the canonical consultation draft
    pub fn paid_consultation_bill() -> Bill {
        let mut bill = Bill::new(
            IdFixtures::bill_id(),
            "BILL-001",
            DraftFixtures::consultation_bill(),
        );
        bill.status = BillStatus::Paid;
        bill
    }
}

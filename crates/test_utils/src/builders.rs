//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about; everything else comes from
//! the fixtures or, for the `random_*` helpers, from `fake`.

use fake::faker::address::en::CityName;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;

use core_kernel::{BillId, Currency, DoctorId, Money};
use domain_billing::{Bill, BillDraft, BillItem, BillStatus};
use domain_registry::{Doctor, DoctorDraft, Specialization};

/// A generated person name
pub fn random_name() -> String {
    Name().fake()
}

/// A generated city name
pub fn random_city() -> String {
    CityName().fake()
}

/// A generated 10-digit mobile number
pub fn random_mobile() -> String {
    let number: u64 = (6_000_000_000u64..10_000_000_000u64).fake();
    number.to_string()
}

/// Builder for doctor records
pub struct DoctorBuilder {
    id: DoctorId,
    draft: DoctorDraft,
    is_active: bool,
}

impl Default for DoctorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorBuilder {
    /// Creates a builder with fixture defaults
    pub fn new() -> Self {
        Self {
            id: DoctorId::new_v7(),
            draft: crate::fixtures::DraftFixtures::doctor(),
            is_active: true,
        }
    }

    /// Creates a builder with generated name and mobile
    pub fn random() -> Self {
        let mut builder = Self::new();
        builder.draft.name = format!("Dr. {}", random_name());
        builder.draft.mobile = random_mobile();
        builder
    }

    /// Sets the doctor id
    pub fn with_id(mut self, id: DoctorId) -> Self {
        self.id = id;
        self
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.draft.name = name.into();
        self
    }

    /// Sets the specialization
    pub fn with_specialization(mut self, specialization: Specialization) -> Self {
        self.draft.specialization = specialization;
        self
    }

    /// Sets the active flag
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Builds the doctor
    pub fn build(self) -> Doctor {
        let mut doctor = Doctor::new(self.id, self.draft);
        if !self.is_active {
            doctor.set_active(false);
        }
        doctor
    }
}

/// Builder for bill records
pub struct BillBuilder {
    id: BillId,
    bill_number: String,
    draft: BillDraft,
    status: BillStatus,
}

impl Default for BillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BillBuilder {
    /// Creates a builder over an empty draft
    pub fn new() -> Self {
        Self {
            id: BillId::new_v7(),
            bill_number: "BILL-001".to_string(),
            draft: BillDraft {
                patient_name: "John Doe".to_string(),
                patient_mobile: "9876543210".to_string(),
                ..BillDraft::default()
            },
            status: BillStatus::Pending,
        }
    }

    /// Sets the bill number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.bill_number = number.into();
        self
    }

    /// Sets the patient
    pub fn for_patient(mut self, name: impl Into<String>, mobile: impl Into<String>) -> Self {
        self.draft.patient_name = name.into();
        self.draft.patient_mobile = mobile.into();
        self
    }

    /// Appends a line item
    pub fn with_item(mut self, name: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        self.draft
            .items
            .push(BillItem::new(name, quantity, Money::new(price, Currency::INR)));
        self
    }

    /// Sets the bill-wide discount
    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.draft.discount = Money::new(discount, Currency::INR);
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: BillStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the bill, deriving subtotal and final amount
    pub fn build(self) -> Bill {
        let mut bill = Bill::new(self.id, self.bill_number, self.draft);
        bill.status = self.status;
        bill
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bill_builder_derives_amounts() {
        let bill = BillBuilder::new()
            .with_number("BILL-042")
            .with_item("X-Ray", 1, dec!(1200))
            .with_item("Medicine", 2, dec!(300))
            .with_discount(dec!(200))
            .with_status(BillStatus::Paid)
            .build();

        assert_eq!(bill.bill_number, "BILL-042");
        assert_eq!(bill.subtotal.amount(), dec!(1800));
        assert_eq!(bill.final_amount.amount(), dec!(1600));
        assert_eq!(bill.status, BillStatus::Paid);
    }

    #[test]
    fn test_doctor_builder_defaults_are_valid() {
        let doctor = DoctorBuilder::new().build();
        assert!(doctor.is_active);
        assert_eq!(doctor.specialization, Specialization::Cardiology);

        let inactive = DoctorBuilder::new().inactive().build();
        assert!(!inactive.is_active);
    }

    #[test]
    fn test_random_mobile_is_ten_digits() {
        for _ in 0..16 {
            let mobile = random_mobile();
            assert_eq!(mobile.len(), 10);
            assert!(mobile.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}

//! Bill records
//!
//! This module defines the finalized bill as stored by the billing screen.
//! The editable draft form of a bill lives in [`crate::draft`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{BillId, BillItemId, Money, Record};

use crate::draft::BillDraft;

/// Settlement status of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// Fully paid
    Paid,
    /// Awaiting payment
    Pending,
    /// Voided
    Cancelled,
}

/// One billable entry on a bill
///
/// The line total is always computed as quantity x unit price; it is not a
/// stored field, so it cannot drift from the values that produce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BillItem {
    /// Identifier, unique within the bill
    pub id: BillItemId,
    /// What is being billed
    #[validate(length(min = 1, message = "Please enter item name"))]
    pub name: String,
    /// Number of units
    pub quantity: u32,
    /// Price per unit
    pub unit_price: Money,
}

impl BillItem {
    /// Creates a line item
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        Self {
            id: BillItemId::new(),
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// quantity x unit price
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(Decimal::from(self.quantity))
    }
}

/// A finalized patient bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier
    pub id: BillId,
    /// Human-readable bill number (BILL-NNN)
    pub bill_number: String,
    /// Patient the bill was raised for
    pub patient_name: String,
    /// Patient's 10-digit mobile number
    pub patient_mobile: String,
    /// Date the bill was issued
    pub issued_on: NaiveDate,
    /// Billable line items, in entry order
    pub items: Vec<BillItem>,
    /// Sum of line totals
    pub subtotal: Money,
    /// Bill-wide discount (not per-line)
    pub discount: Money,
    /// Subtotal minus discount
    pub final_amount: Money,
    /// Settlement status
    pub status: BillStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Bill {
    /// Creates a bill from a draft; new bills start pending
    pub fn new(id: BillId, bill_number: impl Into<String>, draft: BillDraft) -> Self {
        let now = Utc::now();
        let currency = draft.discount.currency();
        let mut bill = Self {
            id,
            bill_number: bill_number.into(),
            patient_name: draft.patient_name,
            patient_mobile: draft.patient_mobile,
            issued_on: now.date_naive(),
            items: draft.items,
            subtotal: Money::zero(currency),
            discount: draft.discount,
            final_amount: Money::zero(currency),
            status: BillStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        bill.recalculate();
        bill
    }

    /// Replaces the mutable fields from a draft and recomputes the derived
    /// amounts. Identity, bill number, issue date, and status are untouched.
    pub fn apply_draft(&mut self, draft: BillDraft) {
        self.patient_name = draft.patient_name;
        self.patient_mobile = draft.patient_mobile;
        self.items = draft.items;
        self.discount = draft.discount;
        self.recalculate();
        self.updated_at = Utc::now();
    }

    /// Recomputes subtotal and final amount from the items and discount
    fn recalculate(&mut self) {
        let currency = self.discount.currency();
        self.subtotal = self
            .items
            .iter()
            .fold(Money::zero(currency), |acc, item| acc + item.line_total());
        self.final_amount = self.subtotal - self.discount;
    }
}

impl Record for Bill {
    type Id = BillId;
    type Draft = BillDraft;
    const KIND: &'static str = "bill";

    fn id(&self) -> BillId {
        self.id
    }

    fn draft(&self) -> BillDraft {
        BillDraft {
            patient_name: self.patient_name.clone(),
            patient_mobile: self.patient_mobile.clone(),
            items: self.items.clone(),
            discount: self.discount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn inr(amount: Decimal) -> Money {
        Money::new(amount, Currency::INR)
    }

    fn consultation_draft() -> BillDraft {
        BillDraft {
            patient_name: "John Doe".to_string(),
            patient_mobile: "9876543210".to_string(),
            items: vec![
                BillItem::new("Consultation", 1, inr(dec!(500))),
                BillItem::new("Blood Test", 1, inr(dec!(800))),
            ],
            discount: inr(dec!(100)),
        }
    }

    #[test]
    fn test_line_total_is_quantity_times_price() {
        let item = BillItem::new("Medicine", 2, inr(dec!(300)));
        assert_eq!(item.line_total(), inr(dec!(600)));
    }

    #[test]
    fn test_new_bill_derives_amounts() {
        let bill = Bill::new(BillId::new_v7(), "BILL-001", consultation_draft());
        assert_eq!(bill.subtotal, inr(dec!(1300)));
        assert_eq!(bill.final_amount, inr(dec!(1200)));
        assert_eq!(bill.status, BillStatus::Pending);
    }

    #[test]
    fn test_apply_draft_recomputes_and_keeps_identity() {
        let mut bill = Bill::new(BillId::new_v7(), "BILL-001", consultation_draft());
        let id = bill.id;
        let number = bill.bill_number.clone();
        let item_totals: Vec<Money> = bill.items.iter().map(BillItem::line_total).collect();

        let mut draft = bill.draft();
        draft.discount = inr(dec!(300));
        bill.apply_draft(draft);

        assert_eq!(bill.id, id);
        assert_eq!(bill.bill_number, number);
        assert_eq!(bill.final_amount, inr(dec!(1000)));
        // item totals unchanged by a discount edit
        let after: Vec<Money> = bill.items.iter().map(BillItem::line_total).collect();
        assert_eq!(after, item_totals);
    }

    #[test]
    fn test_draft_round_trip_preserves_items_in_order() {
        let bill = Bill::new(BillId::new_v7(), "BILL-001", consultation_draft());
        let draft = bill.draft();
        let names: Vec<&str> = draft.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Consultation", "Blood Test"]);
        assert_eq!(draft.discount, inr(dec!(100)));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BillStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}

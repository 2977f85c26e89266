//! Medicine inventory records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use core_kernel::{Currency, MedicineId, Money, Rate, Record};

use crate::error::PharmacyError;

/// A medicine stocked by the clinic pharmacy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    /// Unique identifier
    pub id: MedicineId,
    /// Medicine name
    pub name: String,
    /// Maximum retail price
    pub mrp: Money,
    /// Offer discount as a percentage of MRP (0..=100)
    pub offer_percent: Decimal,
    /// Units currently in stock
    pub stock: u32,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Medicine {
    /// Creates a medicine from a draft.
    ///
    /// Guards the offer range and MRP sign even though validation normally
    /// rejects bad drafts before they reach a data source.
    pub fn new(id: MedicineId, draft: MedicineDraft) -> Result<Self, PharmacyError> {
        check_offer(draft.offer_percent)?;
        if !draft.mrp.is_positive() {
            return Err(PharmacyError::NonPositiveMrp);
        }
        let now = Utc::now();
        Ok(Self {
            id,
            name: draft.name,
            mrp: draft.mrp,
            offer_percent: draft.offer_percent,
            stock: draft.stock,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the mutable fields from a draft, leaving identity and the
    /// creation timestamp untouched
    pub fn apply_draft(&mut self, draft: MedicineDraft) -> Result<(), PharmacyError> {
        check_offer(draft.offer_percent)?;
        if !draft.mrp.is_positive() {
            return Err(PharmacyError::NonPositiveMrp);
        }
        self.name = draft.name;
        self.mrp = draft.mrp;
        self.offer_percent = draft.offer_percent;
        self.stock = draft.stock;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// The offer as a rate
    pub fn offer(&self) -> Rate {
        Rate::from_percentage(self.offer_percent)
    }

    /// Price after the offer discount is applied to MRP
    pub fn selling_price(&self) -> Money {
        self.mrp - self.offer().apply(&self.mrp)
    }

    /// Returns true when no units are left
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}

impl Record for Medicine {
    type Id = MedicineId;
    type Draft = MedicineDraft;
    const KIND: &'static str = "medicine";

    fn id(&self) -> MedicineId {
        self.id
    }

    fn draft(&self) -> MedicineDraft {
        MedicineDraft {
            name: self.name.clone(),
            mrp: self.mrp,
            offer_percent: self.offer_percent,
            stock: self.stock,
        }
    }
}

fn check_offer(offer_percent: Decimal) -> Result<(), PharmacyError> {
    if offer_percent.is_sign_negative() || offer_percent > Decimal::new(100, 0) {
        Err(PharmacyError::OfferOutOfRange(offer_percent))
    } else {
        Ok(())
    }
}

/// Edit buffer for the medicine form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MedicineDraft {
    #[validate(length(min = 1, message = "Please enter medicine name"))]
    pub name: String,
    #[validate(custom(function = validate_mrp))]
    pub mrp: Money,
    #[validate(custom(function = validate_offer))]
    pub offer_percent: Decimal,
    pub stock: u32,
}

impl Default for MedicineDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            mrp: Money::zero(Currency::INR),
            offer_percent: Decimal::ZERO,
            stock: 0,
        }
    }
}

impl MedicineDraft {
    /// Selling price implied by the current draft fields
    pub fn selling_price(&self) -> Result<Money, PharmacyError> {
        check_offer(self.offer_percent)?;
        let offer = Rate::from_percentage(self.offer_percent);
        Ok(self.mrp - offer.apply(&self.mrp))
    }
}

fn validate_mrp(mrp: &Money) -> Result<(), ValidationError> {
    if mrp.is_positive() {
        Ok(())
    } else {
        let mut error = ValidationError::new("mrp");
        error.message = Some(Cow::Borrowed("Please enter a valid MRP"));
        Err(error)
    }
}

fn validate_offer(offer_percent: &Decimal) -> Result<(), ValidationError> {
    if check_offer(*offer_percent).is_ok() {
        Ok(())
    } else {
        let mut error = ValidationError::new("offer");
        error.message = Some(Cow::Borrowed(
            "Please enter a valid offer percentage (0-100)",
        ));
        Err(error)
    }
}

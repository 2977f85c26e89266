//! The editable line-item ledger
//!
//! [`BillDraft`] is the transient buffer a billing form works on: an ordered
//! list of line items plus patient details and a bill-wide discount. All raw
//! text entering a numeric field goes through [`ItemEdit::parse`] or
//! [`BillDraft::set_discount_raw`], the single coercion point - garbage is
//! rejected there and never lands in the draft as zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use core_kernel::input::{parse_amount, parse_quantity, validate_mobile};
use core_kernel::{BillItemId, Currency, Money};

use crate::bill::BillItem;
use crate::error::BillingError;

/// A single edit to one field of a line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEdit {
    Name(String),
    Quantity(u32),
    UnitPrice(Decimal),
}

impl ItemEdit {
    /// Parses a raw form edit against a named field.
    ///
    /// Numeric fields apply the uniform reject-at-boundary policy: any
    /// non-numeric or negative text is an error, for quantity and price
    /// alike.
    pub fn parse(field: &str, raw: &str) -> Result<Self, BillingError> {
        match field {
            "name" => Ok(ItemEdit::Name(raw.to_string())),
            "quantity" => Ok(ItemEdit::Quantity(parse_quantity("quantity", raw)?)),
            "price" => Ok(ItemEdit::UnitPrice(parse_amount("price", raw)?)),
            other => Err(BillingError::UnknownField(other.to_string())),
        }
    }
}

/// Edit buffer for the billing form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_bill_draft, skip_on_field_errors = false))]
pub struct BillDraft {
    #[validate(length(min = 1, message = "Please enter patient name"))]
    pub patient_name: String,
    #[validate(custom(function = validate_mobile))]
    pub patient_mobile: String,
    #[validate(nested)]
    pub items: Vec<BillItem>,
    pub discount: Money,
}

impl Default for BillDraft {
    fn default() -> Self {
        Self {
            patient_name: String::new(),
            patient_mobile: String::new(),
            items: Vec::new(),
            discount: Money::zero(Currency::INR),
        }
    }
}

impl BillDraft {
    /// Appends a fresh line item: empty name, quantity 1, price zero.
    /// Returns the new item's id.
    pub fn add_item(&mut self) -> BillItemId {
        let item = BillItem {
            id: BillItemId::new(),
            name: String::new(),
            quantity: 1,
            unit_price: Money::zero(self.discount.currency()),
        };
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Removes the line item with the given id; silently a no-op when the
    /// id is not present.
    pub fn remove_item(&mut self, id: BillItemId) {
        self.items.retain(|item| item.id != id);
    }

    /// Applies a parsed edit to the matching line item; a no-op when the id
    /// is not present.
    pub fn update_item(&mut self, id: BillItemId, edit: ItemEdit) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            match edit {
                ItemEdit::Name(name) => item.name = name,
                ItemEdit::Quantity(quantity) => item.quantity = quantity,
                ItemEdit::UnitPrice(price) => {
                    item.unit_price = Money::new(price, item.unit_price.currency());
                }
            }
        }
    }

    /// Sets the bill-wide discount from raw form text
    pub fn set_discount_raw(&mut self, raw: &str) -> Result<(), BillingError> {
        let amount = parse_amount("discount", raw)?;
        self.discount = Money::new(amount, self.discount.currency());
        Ok(())
    }

    /// Sum of all line totals
    pub fn subtotal(&self) -> Money {
        let currency = self.discount.currency();
        self.items
            .iter()
            .fold(Money::zero(currency), |acc, item| acc + item.line_total())
    }

    /// Subtotal minus discount.
    ///
    /// Pure function of the draft state. The result can be negative while
    /// the form is mid-edit; validation rejects such a draft at submit.
    pub fn compute_total(&self) -> Money {
        self.subtotal() - self.discount
    }
}

fn validate_bill_draft(draft: &BillDraft) -> Result<(), ValidationError> {
    if draft.items.is_empty() {
        return Err(schema_error("At least one line item is required"));
    }
    if draft.discount.is_negative() {
        return Err(schema_error("Discount cannot be negative"));
    }
    if draft.discount.amount() > draft.subtotal().amount() {
        return Err(schema_error("Discount cannot exceed the subtotal"));
    }
    Ok(())
}

fn schema_error(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("bill");
    error.message = Some(Cow::Borrowed(message));
    error
}

//! Billing screen
//!
//! Forwards the line-item ledger handlers to the open draft and exposes the
//! running total the form footer shows.

use core_kernel::{BillItemId, Money};
use domain_billing::{Bill, BillingError, ItemEdit};

use super::Screen;

/// The billing management screen
pub type BillingScreen = Screen<Bill>;

impl Screen<Bill> {
    /// Appends a fresh line item to the open draft and returns its id
    pub fn add_item(&mut self) -> Option<BillItemId> {
        self.draft_mut().map(|draft| draft.add_item())
    }

    /// Removes a line item from the open draft
    pub fn remove_item(&mut self, id: BillItemId) {
        if let Some(draft) = self.draft_mut() {
            draft.remove_item(id);
        }
    }

    /// Applies a raw form edit to a line item field.
    ///
    /// The parse boundary runs first: non-numeric quantity or price text is
    /// rejected, reported, and never touches the draft.
    pub fn edit_item(&mut self, id: BillItemId, field: &str, raw: &str) -> Result<(), BillingError> {
        match ItemEdit::parse(field, raw) {
            Ok(edit) => {
                if let Some(draft) = self.draft_mut() {
                    draft.update_item(id, edit);
                }
                Ok(())
            }
            Err(err) => {
                self.store().notifier().error(err.to_string());
                Err(err)
            }
        }
    }

    /// Sets the bill-wide discount from raw form text
    pub fn set_discount(&mut self, raw: &str) -> Result<(), BillingError> {
        let result = match self.draft_mut() {
            Some(draft) => draft.set_discount_raw(raw),
            None => Ok(()),
        };
        if let Err(err) = &result {
            self.store().notifier().error(err.to_string());
        }
        result
    }

    /// The total the form footer shows: subtotal minus discount
    pub fn running_total(&self) -> Option<Money> {
        self.draft().map(|draft| draft.compute_total())
    }
}

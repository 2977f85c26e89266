//! Manage Pharmacy screen

use core_kernel::input::{parse_amount, parse_percent, parse_quantity};
use core_kernel::{InputError, Money};
use domain_pharmacy::Medicine;

use super::Screen;

/// The pharmacy management screen
pub type PharmacyScreen = Screen<Medicine>;

impl Screen<Medicine> {
    /// Sets the draft MRP from raw form text; garbage is rejected and
    /// reported, the draft is untouched
    pub fn set_mrp(&mut self, raw: &str) -> Result<(), InputError> {
        match parse_amount("mrp", raw) {
            Ok(amount) => {
                self.with_draft(|draft| draft.mrp = Money::new(amount, draft.mrp.currency()));
                Ok(())
            }
            Err(err) => {
                self.store().notifier().error(err.to_string());
                Err(err)
            }
        }
    }

    /// Sets the draft offer percentage from raw form text
    pub fn set_offer(&mut self, raw: &str) -> Result<(), InputError> {
        match parse_percent("offer", raw) {
            Ok(percent) => {
                self.with_draft(|draft| draft.offer_percent = percent);
                Ok(())
            }
            Err(err) => {
                self.store().notifier().error(err.to_string());
                Err(err)
            }
        }
    }

    /// Sets the draft stock count from raw form text
    pub fn set_stock(&mut self, raw: &str) -> Result<(), InputError> {
        match parse_quantity("quantity", raw) {
            Ok(stock) => {
                self.with_draft(|draft| draft.stock = stock);
                Ok(())
            }
            Err(err) => {
                self.store().notifier().error(err.to_string());
                Err(err)
            }
        }
    }

    /// Selling price implied by the open draft, when it is coherent
    pub fn price_preview(&self) -> Option<Money> {
        self.draft().and_then(|draft| draft.selling_price().ok())
    }
}

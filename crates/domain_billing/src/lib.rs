//! Billing Domain - patient bills and the line-item ledger
//!
//! A bill holds an ordered list of billable line items plus a bill-wide
//! discount. Per-item totals are always computed from quantity and unit
//! price; the bill's subtotal and final amount are recomputed on every
//! mutation, never stored independently of the items that produce them.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{BillDraft, ItemEdit};
//!
//! let mut draft = BillDraft::default();
//! let item = draft.add_item();
//! draft.update_item(item, ItemEdit::parse("name", "Consultation")?);
//! draft.update_item(item, ItemEdit::parse("price", "500")?);
//! let total = draft.compute_total();
//! ```

pub mod bill;
pub mod draft;
pub mod error;

pub use bill::{Bill, BillItem, BillStatus};
pub use draft::{BillDraft, ItemEdit};
pub use error::BillingError;

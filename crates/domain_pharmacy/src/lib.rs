//! Pharmacy Domain - medicine inventory
//!
//! Medicines carry a maximum retail price, an offer percentage, and a stock
//! count. The selling price is always derived from MRP and offer.

pub mod medicine;
pub mod error;

pub use medicine::{Medicine, MedicineDraft};
pub use error::PharmacyError;

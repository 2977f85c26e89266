//! Interface Console - the admin screens
//!
//! One controller per management screen, each composing a record store, an
//! editor surface, and the shared notification channel. The controllers are
//! what a rendering layer would bind to; everything user-visible flows out
//! through notifications and store snapshots.

pub mod config;
pub mod screens;

pub use config::ConsoleConfig;
pub use screens::{BillingScreen, DoctorsScreen, PatientsScreen, PharmacyScreen, Screen};

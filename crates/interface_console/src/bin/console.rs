//! Clinic Admin Console - demo walkthrough binary
//!
//! Boots every management screen against the seeded mock data sources and
//! drives a short session: listing, creating, editing, toggling, and
//! deleting records, with the notification stream printed after each step.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (500ms simulated latency)
//! cargo run --bin clinic-console
//!
//! # Run instantly with debug logging
//! CLINIC_LATENCY_MS=0 CLINIC_LOG_LEVEL=debug cargo run --bin clinic-console
//! ```
//!
//! # Environment Variables
//!
//! * `CLINIC_LATENCY_MS` - Simulated network latency in milliseconds (default: 500)
//! * `CLINIC_CURRENCY` - Draft currency code (default: INR)
//! * `CLINIC_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_registry::Specialization;
use infra_mock::{MockBillSource, MockDoctorSource, MockMedicineSource, MockPatientSource};
use interface_console::{
    BillingScreen, ConsoleConfig, DoctorsScreen, PatientsScreen, PharmacyScreen,
};
use record_store::notify::drain;
use record_store::{AlwaysConfirm, AlwaysDecline, Notification, Notifier, Severity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ConsoleConfig::from_env().unwrap_or_default();
    init_tracing(&config.log_level);

    tracing::info!(
        latency_ms = config.latency_ms,
        currency = %config.currency,
        "Starting clinic admin console walkthrough"
    );

    let (notifier, mut notifications) = Notifier::channel();
    let latency = config.latency();

    let mut doctors = DoctorsScreen::new(
        Arc::new(MockDoctorSource::seeded(latency)),
        notifier.clone(),
    );
    let mut patients = PatientsScreen::new(
        Arc::new(MockPatientSource::seeded(latency)),
        notifier.clone(),
    );
    let mut pharmacy = PharmacyScreen::new(
        Arc::new(MockMedicineSource::seeded(latency)),
        notifier.clone(),
    );
    let mut billing = BillingScreen::new(Arc::new(MockBillSource::seeded(latency)), notifier);

    // ---- Manage Doctors -------------------------------------------------
    println!("== Manage Doctors ==");
    let _ = doctors.refresh().await;
    for doctor in doctors.store().snapshot().iter() {
        println!(
            "  {} @ {} [{}] - {}",
            doctor.name,
            doctor.clinic_name,
            doctor.specialization,
            if doctor.is_active { "active" } else { "inactive" }
        );
    }

    doctors.open_add();
    doctors.with_draft(|draft| {
        draft.name = "Dr. Priya Patel".to_string();
        draft.clinic_name = "Lakeside Clinic".to_string();
        draft.mobile = "9876500000".to_string();
        draft.specialization = "dermatology".parse().unwrap_or(Specialization::General);
        draft.experience_years = 6;
    });
    let _ = doctors.submit().await;

    if let Some(doctor) = doctors.store().snapshot().first().cloned() {
        let _ = doctors.toggle_active(doctor.id, false);
    }
    flush(&mut notifications);

    // ---- Manage Patients ------------------------------------------------
    println!("== Manage Patients ==");
    let _ = patients.refresh().await;
    println!(
        "  doctors available for booking: {}",
        PatientsScreen::doctor_options(doctors.store()).join(", ")
    );
    for patient in patients.store().snapshot().iter() {
        println!(
            "  {} ({}) with {} - {}",
            patient.name, patient.city, patient.doctor, patient.problem
        );
    }

    if let Some(patient) = patients.store().snapshot().first().cloned() {
        patients.open_edit(patient.id);
        patients.with_draft(|draft| draft.problem = "Follow-up visit".to_string());
        let _ = patients.submit().await;
    }
    flush(&mut notifications);

    // ---- Manage Pharmacy ------------------------------------------------
    println!("== Manage Pharmacy ==");
    let _ = pharmacy.refresh().await;
    for medicine in pharmacy.store().snapshot().iter() {
        println!(
            "  {} MRP {} offer {}% -> sells at {} ({} in stock)",
            medicine.name,
            medicine.mrp,
            medicine.offer_percent,
            medicine.selling_price(),
            medicine.stock
        );
    }

    pharmacy.open_add();
    pharmacy.with_draft(|draft| draft.name = "Ibuprofen".to_string());
    // garbage is rejected at the boundary, the draft keeps its old value
    let _ = pharmacy.set_mrp("abc");
    let _ = pharmacy.set_mrp("60");
    let _ = pharmacy.set_offer("5");
    let _ = pharmacy.set_stock("40");
    if let Some(price) = pharmacy.price_preview() {
        println!("  new medicine will sell at {price}");
    }
    let _ = pharmacy.submit().await;
    flush(&mut notifications);

    // ---- Billing --------------------------------------------------------
    println!("== Billing ==");
    let _ = billing.refresh().await;
    for bill in billing.store().snapshot().iter() {
        println!(
            "  {} {} - {} ({:?})",
            bill.bill_number, bill.patient_name, bill.final_amount, bill.status
        );
    }

    billing.open_add();
    billing.with_draft(|draft| {
        draft.patient_name = "Robert Wilson".to_string();
        draft.patient_mobile = "7654321098".to_string();
    });
    if let Some(item) = billing.add_item() {
        let _ = billing.edit_item(item, "name", "Consultation");
        let _ = billing.edit_item(item, "price", "500");
        // a non-numeric quantity never reaches the draft
        let _ = billing.edit_item(item, "quantity", "abc");
        let _ = billing.edit_item(item, "quantity", "1");
    }
    if let Some(item) = billing.add_item() {
        let _ = billing.edit_item(item, "name", "Dental X-Ray");
        let _ = billing.edit_item(item, "price", "800");
    }
    let _ = billing.set_discount("100");
    if let Some(total) = billing.running_total() {
        println!("  draft total: {total}");
    }
    let _ = billing.submit().await;

    // a declined confirmation leaves the list untouched
    if let Some(bill) = billing.store().snapshot().first().cloned() {
        let _ = billing.delete(bill.id, &AlwaysDecline).await;
        let _ = billing.delete(bill.id, &AlwaysConfirm).await;
    }
    println!("  bills after delete: {}", billing.store().len());
    flush(&mut notifications);

    tracing::info!("Walkthrough complete");
    Ok(())
}

/// Prints and clears everything currently on the notification channel
fn flush(notifications: &mut UnboundedReceiver<Notification>) {
    for notification in drain(notifications) {
        let tag = match notification.severity {
            Severity::Success => "ok",
            Severity::Info => "info",
            Severity::Error => "err",
        };
        println!("  [{tag}] {}", notification.message);
    }
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

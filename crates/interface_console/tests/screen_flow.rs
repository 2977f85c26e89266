//! End-to-end screen flow tests
//!
//! These drive the screens the way a rendering layer would - against the
//! seeded mock sources with zero latency - and verify the behavior the
//! billing and doctors pages were specified with.

use std::sync::Arc;

use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_billing::BillStatus;
use infra_mock::{MockBillSource, MockDoctorSource, SimulatedLatency};
use interface_console::{BillingScreen, DoctorsScreen, PatientsScreen};
use record_store::notify::drain;
use record_store::{
    AlwaysConfirm, AlwaysDecline, Notification, Notifier, Severity, StoreOutcome,
};
use tokio::sync::mpsc::UnboundedReceiver;

fn inr(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::INR)
}

async fn billing_screen() -> (BillingScreen, UnboundedReceiver<Notification>) {
    let (notifier, rx) = Notifier::channel();
    let screen = BillingScreen::new(
        Arc::new(MockBillSource::seeded(SimulatedLatency::none())),
        notifier,
    );
    let _ = screen.refresh().await;
    (screen, rx)
}

async fn doctors_screen() -> (DoctorsScreen, UnboundedReceiver<Notification>) {
    let (notifier, rx) = Notifier::channel();
    let screen = DoctorsScreen::new(
        Arc::new(MockDoctorSource::seeded(SimulatedLatency::none())),
        notifier,
    );
    let _ = screen.refresh().await;
    (screen, rx)
}

#[tokio::test]
async fn test_create_bill_end_to_end() {
    let (mut billing, mut rx) = billing_screen().await;
    assert_eq!(billing.store().len(), 2);

    billing.open_add();
    billing.with_draft(|draft| {
        draft.patient_name = "Robert Wilson".to_string();
        draft.patient_mobile = "7654321098".to_string();
    });

    let item = billing.add_item().unwrap();
    billing.edit_item(item, "name", "Consultation").unwrap();
    billing.edit_item(item, "price", "500").unwrap();
    let item = billing.add_item().unwrap();
    billing.edit_item(item, "name", "Blood Test").unwrap();
    billing.edit_item(item, "price", "800").unwrap();
    billing.set_discount("100").unwrap();

    assert_eq!(billing.running_total(), Some(inr(dec!(1200))));

    let outcome = billing.submit().await;
    assert_eq!(outcome, StoreOutcome::Completed);
    assert_eq!(billing.store().len(), 3);
    // the editor closed after a successful submit
    assert!(billing.draft().is_none());

    let snapshot = billing.store().snapshot();
    let created = snapshot.last().unwrap();
    assert_eq!(created.bill_number, "BILL-003");
    assert_eq!(created.final_amount, inr(dec!(1200)));
    assert_eq!(created.status, BillStatus::Pending);

    let notes = drain(&mut rx);
    assert!(notes
        .iter()
        .any(|n| n.severity == Severity::Success && n.message.contains("created")));
}

#[tokio::test]
async fn test_validation_blocks_an_empty_bill() {
    let (mut billing, mut rx) = billing_screen().await;
    billing.open_add();

    let outcome = billing.submit().await;
    assert_eq!(outcome, StoreOutcome::Invalid);
    assert_eq!(billing.store().len(), 2);
    // the editor stays open so the user can fix the draft
    assert!(billing.draft().is_some());

    let notes = drain(&mut rx);
    assert!(!notes.is_empty());
    assert!(notes.iter().all(|n| n.severity == Severity::Error));
    assert!(notes
        .iter()
        .any(|n| n.message.contains("Please enter patient name")));
    assert!(notes
        .iter()
        .any(|n| n.message.contains("At least one line item is required")));
}

#[tokio::test]
async fn test_editing_the_discount_recomputes_only_the_final_amount() {
    let (mut billing, _rx) = billing_screen().await;
    let before = billing.store().snapshot();
    let target = before[0].clone();
    let untouched = before[1].clone();

    assert!(billing.open_edit(target.id));
    billing.set_discount("300").unwrap();
    let outcome = billing.submit().await;

    assert_eq!(outcome, StoreOutcome::Completed);
    assert_eq!(billing.store().len(), 2);

    let after = billing.store().snapshot();
    assert_eq!(after[0].final_amount, inr(dec!(1000)));
    assert_eq!(after[0].subtotal, inr(dec!(1300)));
    assert_eq!(after[0].items, target.items);
    // every other record is untouched
    assert_eq!(after[1], untouched);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (billing, _rx) = billing_screen().await;
    let target = billing.store().snapshot()[0].id;

    let declined = billing.delete(target, &AlwaysDecline).await;
    assert_eq!(declined, StoreOutcome::Declined);
    assert_eq!(billing.store().len(), 2);

    let confirmed = billing.delete(target, &AlwaysConfirm).await;
    assert_eq!(confirmed, StoreOutcome::Completed);
    assert_eq!(billing.store().len(), 1);
}

#[tokio::test]
async fn test_non_numeric_quantity_never_reaches_the_draft() {
    let (mut billing, mut rx) = billing_screen().await;
    billing.open_add();
    let item = billing.add_item().unwrap();

    assert!(billing.edit_item(item, "quantity", "abc").is_err());
    assert!(billing.edit_item(item, "price", "abc").is_err());
    assert!(billing.set_discount("abc").is_err());

    let draft = billing.draft().unwrap();
    let row = draft.items.iter().find(|i| i.id == item).unwrap();
    assert_eq!(row.quantity, 1);
    assert!(row.unit_price.is_zero());
    assert!(draft.discount.is_zero());

    let notes = drain(&mut rx);
    assert_eq!(notes.len(), 3);
    assert!(notes.iter().all(|n| n.severity == Severity::Error));
}

#[tokio::test]
async fn test_doctor_toggle_is_immediate_and_notifies() {
    let (doctors, mut rx) = doctors_screen().await;
    let target = doctors.store().snapshot()[0].clone();
    assert!(target.is_active);

    let outcome = doctors.toggle_active(target.id, false);
    assert_eq!(outcome, StoreOutcome::Completed);
    assert!(!doctors.store().snapshot()[0].is_active);

    let notes = drain(&mut rx);
    assert!(notes
        .iter()
        .any(|n| n.severity == Severity::Success && n.message.contains("deactivated")));
}

#[tokio::test]
async fn test_doctor_pick_list_hides_inactive_doctors() {
    let (doctors, _rx) = doctors_screen().await;
    let all = PatientsScreen::doctor_options(doctors.store());
    assert_eq!(all.len(), 2);

    let first = doctors.store().snapshot()[0].clone();
    let _ = doctors.toggle_active(first.id, false);

    let remaining = PatientsScreen::doctor_options(doctors.store());
    assert_eq!(remaining.len(), 1);
    assert!(!remaining.contains(&first.name));
}

#[tokio::test]
async fn test_screens_work_over_custom_seeded_sources() {
    use test_utils::{assert_bill_consistent, BillBuilder};

    let seed = vec![
        BillBuilder::new()
            .with_number("BILL-101")
            .with_item("Consultation", 1, dec!(500))
            .with_item("Blood Test", 1, dec!(800))
            .with_discount(dec!(100))
            .with_status(BillStatus::Paid)
            .build(),
        BillBuilder::new()
            .with_number("BILL-102")
            .for_patient("Jane Smith", "8765432109")
            .with_item("X-Ray", 1, dec!(1200))
            .build(),
    ];

    let (notifier, _rx) = Notifier::channel();
    let screen = BillingScreen::new(
        Arc::new(MockBillSource::with_records(SimulatedLatency::none(), seed)),
        notifier,
    );
    let _ = screen.refresh().await;

    assert_eq!(screen.store().len(), 2);
    for bill in screen.store().snapshot().iter() {
        assert_bill_consistent(bill);
    }
    assert_eq!(
        screen.store().snapshot()[0].final_amount,
        inr(dec!(1200))
    );
}

#[tokio::test]
async fn test_failed_create_preserves_the_list() {
    let (notifier, mut rx) = Notifier::channel();
    let source = Arc::new(MockBillSource::seeded(SimulatedLatency::none()));
    let mut billing = BillingScreen::new(source.clone(), notifier);
    let _ = billing.refresh().await;

    billing.open_add();
    billing.with_draft(|draft| {
        draft.patient_name = "Robert Wilson".to_string();
        draft.patient_mobile = "7654321098".to_string();
    });
    let item = billing.add_item().unwrap();
    billing.edit_item(item, "name", "Consultation").unwrap();
    billing.edit_item(item, "price", "500").unwrap();

    drain(&mut rx);
    source.fail_next("backend unreachable");

    let outcome = billing.submit().await;
    assert_eq!(outcome, StoreOutcome::Failed);
    assert_eq!(billing.store().len(), 2);
    assert!(!billing.is_loading());

    let notes = drain(&mut rx);
    assert!(notes
        .iter()
        .any(|n| n.severity == Severity::Error && n.message.contains("Failed to create")));

    // retrying the same user action succeeds - nothing was lost
    let outcome = billing.submit().await;
    assert_eq!(outcome, StoreOutcome::Completed);
    assert_eq!(billing.store().len(), 3);
}

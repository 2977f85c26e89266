//! Manage Doctors screen

use core_kernel::DoctorId;
use domain_registry::Doctor;
use record_store::StoreOutcome;

use super::Screen;

/// The doctors management screen
pub type DoctorsScreen = Screen<Doctor>;

impl Screen<Doctor> {
    /// Flips a doctor's active flag in place: synchronous, immediate, no
    /// confirmation and no simulated round trip.
    pub fn toggle_active(&self, id: DoctorId, active: bool) -> StoreOutcome {
        let outcome = self.store().patch(id, |doctor| doctor.set_active(active));
        if outcome.is_completed() {
            let verb = if active { "activated" } else { "deactivated" };
            self.store()
                .notifier()
                .success(format!("Doctor {verb} successfully"));
        }
        outcome
    }
}

//! The "upcoming appointments" list.

use chrono::NaiveDate;
use tracing::debug;

use crate::appointment::Appointment;
use crate::directory::{Directory, Doctor, Patient};
use crate::search::SearchFilter;
use crate::store::AppointmentStore;

/// Appointments starting strictly after `today` that pass `filter`, earliest
/// first. Appointments sharing a start date keep their store order.
pub fn upcoming<'a, D, P>(
    store: &'a AppointmentStore,
    today: NaiveDate,
    filter: &SearchFilter,
    doctors: &D,
    patients: &P,
) -> Vec<&'a Appointment>
where
    D: Directory<Doctor> + ?Sized,
    P: Directory<Patient> + ?Sized,
{
    let mut list: Vec<&Appointment> = store
        .all()
        .iter()
        .filter(|a| a.start_date > today)
        .filter(|a| filter.matches(a, doctors, patients))
        .collect();

    // Stable sort
    list.sort_by_key(|a| a.start_date);

    debug!(count = list.len(), total = store.len(), "derived upcoming list");
    list
}

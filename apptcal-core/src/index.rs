//! Day-level queries over an [`AppointmentStore`].
//!
//! Every query is a fresh linear scan of the store. Nothing is cached, so
//! results can never drift from the store after an insert or replace.

use chrono::NaiveDate;
use tracing::debug;

use crate::appointment::Appointment;
use crate::directory::{Directory, Doctor, Patient};
use crate::grid::{GridCell, MonthGrid};
use crate::search::SearchFilter;
use crate::store::AppointmentStore;

/// An appointment active on the queried day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveAppointment<'a> {
    pub appointment: &'a Appointment,
    /// Whether the queried day is where the span begins (start time is shown)
    pub is_first_day: bool,
}

/// A grid cell together with what should be drawn in it.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub cell: GridCell,
    pub is_today: bool,
    /// Strictly before today
    pub is_past: bool,
    pub appointments: Vec<ActiveAppointment<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct AppointmentIndex<'a> {
    store: &'a AppointmentStore,
}

impl<'a> AppointmentIndex<'a> {
    pub fn new(store: &'a AppointmentStore) -> Self {
        AppointmentIndex { store }
    }

    /// Appointments whose span contains `day`, in store order.
    pub fn active_on(&self, day: NaiveDate) -> Vec<ActiveAppointment<'a>> {
        self.store
            .all()
            .iter()
            .filter_map(|appointment| {
                let span = appointment.span();
                span.contains(day).then(|| ActiveAppointment {
                    appointment,
                    is_first_day: span.is_first_day(day),
                })
            })
            .collect()
    }

    /// `active_on`, narrowed to appointments passing `filter`.
    pub fn active_on_matching<D, P>(
        &self,
        day: NaiveDate,
        filter: &SearchFilter,
        doctors: &D,
        patients: &P,
    ) -> Vec<ActiveAppointment<'a>>
    where
        D: Directory<Doctor> + ?Sized,
        P: Directory<Patient> + ?Sized,
    {
        let mut active = self.active_on(day);
        active.retain(|a| filter.matches(a.appointment, doctors, patients));
        active
    }

    /// One `DayCell` per grid position, with visible appointments attached.
    pub fn month_view<D, P>(
        &self,
        grid: &MonthGrid,
        today: NaiveDate,
        filter: &SearchFilter,
        doctors: &D,
        patients: &P,
    ) -> Vec<DayCell<'a>>
    where
        D: Directory<Doctor> + ?Sized,
        P: Directory<Patient> + ?Sized,
    {
        let cells: Vec<DayCell<'a>> = grid
            .cells()
            .map(|cell| match cell {
                GridCell::Blank => DayCell {
                    cell,
                    is_today: false,
                    is_past: false,
                    appointments: Vec::new(),
                },
                GridCell::Day(day) => DayCell {
                    cell,
                    is_today: day == today,
                    is_past: day < today,
                    appointments: self.active_on_matching(day, filter, doctors, patients),
                },
            })
            .collect();

        debug!(
            month = %grid.title(),
            cells = cells.len(),
            store = self.store.len(),
            "built month view"
        );
        cells
    }
}

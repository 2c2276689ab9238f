//! The authoritative in-memory appointment collection.
//!
//! Everything else in the crate reads through a borrowed `&AppointmentStore`;
//! `insert` and `replace` are the only mutators. Callers that share a store
//! across threads must wrap it in a single lock so readers never observe a
//! half-applied write.

use tracing::debug;

use crate::appointment::{Appointment, AppointmentDraft, AppointmentId};
use crate::error::{SchedulerError, SchedulerResult};

#[derive(Debug, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    next_id: u64,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh id, append, and return the stored record.
    pub fn insert(&mut self, draft: AppointmentDraft) -> Appointment {
        self.next_id += 1;
        let appointment = Appointment::from_draft(AppointmentId(self.next_id), draft);
        debug!(id = %appointment.id, start = %appointment.start_date, end = %appointment.end_date, "inserted appointment");

        self.appointments.push(appointment.clone());
        appointment
    }

    /// Swap the record with this id in place, keeping the id.
    pub fn replace(&mut self, id: AppointmentId, draft: AppointmentDraft) -> SchedulerResult<Appointment> {
        let slot = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(SchedulerError::NotFound(id))?;

        *slot = Appointment::from_draft(id, draft);
        debug!(id = %id, start = %slot.start_date, end = %slot.end_date, "replaced appointment");

        Ok(slot.clone())
    }

    /// Every appointment, in insertion order.
    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

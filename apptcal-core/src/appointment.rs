//! Appointment records.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::date_range::DateRange;

/// Store-assigned identifier. Never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppointmentId(pub u64);

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default time of day for new bookings.
pub fn default_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// An appointment before the store has given it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    /// Opaque key into the doctor directory
    pub doctor_id: String,
    /// Opaque key into the patient directory
    pub patient_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Only meaningful on the first day of the span
    pub start_time: NaiveTime,
    pub description: Option<String>,
}

/// A stored appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub doctor_id: String,
    pub patient_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub description: Option<String>,
}

impl Appointment {
    pub fn from_draft(id: AppointmentId, draft: AppointmentDraft) -> Self {
        Appointment {
            id,
            doctor_id: draft.doctor_id,
            patient_id: draft.patient_id,
            start_date: draft.start_date,
            end_date: draft.end_date,
            start_time: draft.start_time,
            description: draft.description,
        }
    }

    /// Everything but the id, e.g. to seed an edit form.
    pub fn to_draft(&self) -> AppointmentDraft {
        AppointmentDraft {
            doctor_id: self.doctor_id.clone(),
            patient_id: self.patient_id.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            start_time: self.start_time,
            description: self.description.clone(),
        }
    }

    pub fn span(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    pub fn is_multi_day(&self) -> bool {
        self.span().is_multi_day()
    }

    /// Description, or "" when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

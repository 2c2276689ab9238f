//! Booking entry point: validate a candidate, then insert or replace it.
//!
//! Only two rules are enforced: the span may not start before today, and it
//! may not end before it starts. Overlapping bookings are accepted.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::appointment::{Appointment, AppointmentDraft, AppointmentId};
use crate::clock::Clock;
use crate::date_range::DateRange;
use crate::error::{SchedulerError, SchedulerResult};
use crate::notify::{Notification, NotificationSink};
use crate::store::AppointmentStore;

pub const BOOKED_MESSAGE: &str = "Appointment booked successfully!";
pub const UPDATED_MESSAGE: &str = "Appointment updated successfully!";

/// A submitted booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Set when editing an existing appointment
    pub id: Option<AppointmentId>,
    pub draft: AppointmentDraft,
}

impl Candidate {
    pub fn new(draft: AppointmentDraft) -> Self {
        Candidate { id: None, draft }
    }

    pub fn edit(id: AppointmentId, draft: AppointmentDraft) -> Self {
        Candidate { id: Some(id), draft }
    }
}

/// Check the date rules against `today`. Today itself is bookable.
pub fn validate(draft: &AppointmentDraft, today: NaiveDate) -> SchedulerResult<()> {
    if draft.start_date < today {
        return Err(SchedulerError::PastDate);
    }
    DateRange::checked(draft.start_date, draft.end_date)?;
    Ok(())
}

/// Validate and store a candidate.
pub fn book(store: &mut AppointmentStore, candidate: Candidate, today: NaiveDate) -> SchedulerResult<Appointment> {
    if let Err(e) = validate(&candidate.draft, today) {
        warn!(start = %candidate.draft.start_date, end = %candidate.draft.end_date, "rejected booking: {}", e);
        return Err(e);
    }

    let appointment = match candidate.id {
        Some(id) => store.replace(id, candidate.draft)?,
        None => store.insert(candidate.draft),
    };

    info!(
        id = %appointment.id,
        doctor = %appointment.doctor_id,
        patient = %appointment.patient_id,
        "booked appointment"
    );
    Ok(appointment)
}

/// `book` with "today" from `clock`, reporting the outcome to `sink`.
pub fn book_and_notify<C, S>(
    store: &mut AppointmentStore,
    candidate: Candidate,
    clock: &C,
    sink: &mut S,
) -> SchedulerResult<Appointment>
where
    C: Clock + ?Sized,
    S: NotificationSink + ?Sized,
{
    let editing = candidate.id.is_some();

    match book(store, candidate, clock.today()) {
        Ok(appointment) => {
            let message = if editing { UPDATED_MESSAGE } else { BOOKED_MESSAGE };
            sink.notify(Notification::success(message));
            Ok(appointment)
        }
        Err(e) => {
            sink.notify(Notification::failure(e.to_string()));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::index::AppointmentIndex;
    use crate::notify::NotificationKind;
    use chrono::{Duration, NaiveTime};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn make_test_draft(start: NaiveDate, end: NaiveDate) -> AppointmentDraft {
        AppointmentDraft {
            doctor_id: "1".to_string(),
            patient_id: "2".to_string(),
            start_date: start,
            end_date: end,
            start_time: NaiveTime::from_hms_opt(14, 15, 0).unwrap(),
            description: Some("Consultation".to_string()),
        }
    }

    #[test]
    fn past_start_is_rejected() {
        let mut store = AppointmentStore::new();
        let yesterday = today() - Duration::days(1);

        let err = book(&mut store, Candidate::new(make_test_draft(yesterday, yesterday)), today()).unwrap_err();
        assert!(matches!(err, SchedulerError::PastDate));
        assert_eq!(err.to_string(), "Cannot book appointments in the past!");
        assert!(store.is_empty());
    }

    #[test]
    fn inverted_span_is_rejected() {
        let mut store = AppointmentStore::new();
        let yesterday = today() - Duration::days(1);

        let err = book(&mut store, Candidate::new(make_test_draft(today(), yesterday)), today()).unwrap_err();
        assert!(matches!(err, SchedulerError::InvertedRange));
        assert_eq!(err.to_string(), "End date cannot be before start date!");
        assert!(err.is_validation());
        assert!(store.is_empty());

        // A start in the past wins over an inverted span
        let past = today() - Duration::days(2);
        let err = validate(&make_test_draft(today(), past), today() + Duration::days(1)).unwrap_err();
        assert!(matches!(err, SchedulerError::PastDate));
        assert!(validate(&make_test_draft(today(), today()), today()).is_ok());
    }

    #[test]
    fn booking_today_spanning_three_days_is_indexed() {
        let mut store = AppointmentStore::new();
        let end = today() + Duration::days(2);

        let apt = book(&mut store, Candidate::new(make_test_draft(today(), end)), today()).unwrap();
        let index = AppointmentIndex::new(&store);

        let on = |offset: i64| {
            index
                .active_on(today() + Duration::days(offset))
                .into_iter()
                .find(|a| a.appointment.id == apt.id)
        };
        assert!(on(0).is_some_and(|a| a.is_first_day));
        assert!(on(1).is_some_and(|a| !a.is_first_day));
        assert!(on(2).is_some_and(|a| !a.is_first_day));
        assert!(on(3).is_none());
    }

    #[test]
    fn editing_replaces_in_place() {
        let mut store = AppointmentStore::new();
        let apt = book(&mut store, Candidate::new(make_test_draft(today(), today())), today()).unwrap();

        let mut changed = apt.to_draft();
        changed.doctor_id = "3".to_string();
        changed.end_date = today() + Duration::days(1);
        let updated = book(&mut store, Candidate::edit(apt.id, changed), today()).unwrap();

        assert_eq!(updated.id, apt.id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].doctor_id, "3");
    }

    #[test]
    fn editing_unknown_id_fails() {
        let mut store = AppointmentStore::new();
        let err = book(
            &mut store,
            Candidate::edit(AppointmentId(7), make_test_draft(today(), today())),
            today(),
        )
        .unwrap_err();

        assert!(matches!(err, SchedulerError::NotFound(AppointmentId(7))));
        assert!(!err.is_validation());
    }

    #[test]
    fn overlapping_bookings_for_same_doctor_are_accepted() {
        let mut store = AppointmentStore::new();
        let draft = make_test_draft(today(), today());

        book(&mut store, Candidate::new(draft.clone()), today()).unwrap();
        book(&mut store, Candidate::new(draft), today()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn notifications_report_each_outcome() {
        let mut store = AppointmentStore::new();
        let clock = FixedClock(today());
        let mut sink: Vec<Notification> = Vec::new();

        let apt = book_and_notify(&mut store, Candidate::new(make_test_draft(today(), today())), &clock, &mut sink)
            .unwrap();
        book_and_notify(&mut store, Candidate::edit(apt.id, apt.to_draft()), &clock, &mut sink).unwrap();
        let past = today() - Duration::days(3);
        assert!(book_and_notify(&mut store, Candidate::new(make_test_draft(past, past)), &clock, &mut sink).is_err());

        let messages: Vec<_> = sink.iter().map(|n| (n.kind, n.message.as_str())).collect();
        assert_eq!(
            messages,
            vec![
                (NotificationKind::Success, BOOKED_MESSAGE),
                (NotificationKind::Success, UPDATED_MESSAGE),
                (NotificationKind::Failure, "Cannot book appointments in the past!"),
            ]
        );
    }
}

//! Free-text appointment search.
//!
//! A query matches when the doctor name, the patient name, or the description
//! contains it, ignoring case. A blank query matches everything.

use crate::appointment::Appointment;
use crate::directory::{Directory, Doctor, Patient};

/// A prepared query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    // Trimmed and lowercased; None for a blank query
    needle: Option<String>,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        let trimmed = query.trim();
        SearchFilter {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    /// The filter that matches every appointment.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    pub fn matches<D, P>(&self, appointment: &Appointment, doctors: &D, patients: &P) -> bool
    where
        D: Directory<Doctor> + ?Sized,
        P: Directory<Patient> + ?Sized,
    {
        let Some(needle) = &self.needle else {
            return true;
        };

        // Unresolved ids simply don't match on that field.
        let contains = |haystack: Option<&str>| {
            haystack.is_some_and(|h| h.to_lowercase().contains(needle.as_str()))
        };

        contains(doctors.name_of(&appointment.doctor_id))
            || contains(patients.name_of(&appointment.patient_id))
            || contains(Some(appointment.description_text()))
    }
}

/// One-shot form of [`SearchFilter::matches`].
pub fn matches<D, P>(appointment: &Appointment, query: &str, doctors: &D, patients: &P) -> bool
where
    D: Directory<Doctor> + ?Sized,
    P: Directory<Patient> + ?Sized,
{
    SearchFilter::new(query).matches(appointment, doctors, patients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::AppointmentId;
    use crate::directory::{default_doctors, default_patients, Catalog};
    use chrono::{NaiveDate, NaiveTime};

    fn make_test_appointment(doctor: &str, patient: &str, description: Option<&str>) -> Appointment {
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        Appointment {
            id: AppointmentId(1),
            doctor_id: doctor.to_string(),
            patient_id: patient.to_string(),
            start_date: date,
            end_date: date,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            description: description.map(str::to_string),
        }
    }

    fn directories() -> (Catalog<Doctor>, Catalog<Patient>) {
        (Catalog::new(default_doctors()), Catalog::new(default_patients()))
    }

    #[test]
    fn blank_query_matches_everything() {
        let (doctors, patients) = directories();
        let unresolvable = make_test_appointment("99", "99", None);

        for query in ["", "   ", "\t\n"] {
            assert!(matches(&unresolvable, query, &doctors, &patients), "query {:?}", query);
        }
        assert!(SearchFilter::all().is_blank());
    }

    #[test]
    fn matches_doctor_name_case_insensitively() {
        let (doctors, patients) = directories();
        let apt = make_test_appointment("1", "2", None);

        assert!(matches(&apt, "sarah", &doctors, &patients));
        assert!(matches(&apt, "SMITH", &doctors, &patients));
        assert!(!matches(&apt, "emily", &doctors, &patients));
    }

    #[test]
    fn matches_patient_name() {
        let (doctors, patients) = directories();
        let apt = make_test_appointment("1", "2", None);

        assert!(matches(&apt, "garcia", &doctors, &patients));
        assert!(!matches(&apt, "wilson", &doctors, &patients));
    }

    #[test]
    fn matches_description_and_tolerates_missing_one() {
        let (doctors, patients) = directories();
        let with = make_test_appointment("1", "1", Some("Annual Checkup"));
        let without = make_test_appointment("1", "1", None);

        assert!(matches(&with, "checkup", &doctors, &patients));
        assert!(!matches(&without, "checkup", &doctors, &patients));
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let (doctors, patients) = directories();
        let apt = make_test_appointment("2", "3", None);

        assert!(matches(&apt, "  john doe  ", &doctors, &patients));
    }

    #[test]
    fn unknown_ids_do_not_match_but_description_still_can() {
        let (doctors, patients) = directories();
        let apt = make_test_appointment("99", "42", Some("x-ray"));

        assert!(!matches(&apt, "dr.", &doctors, &patients));
        assert!(matches(&apt, "X-RAY", &doctors, &patients));
    }
}

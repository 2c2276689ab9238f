use apptcal_core::clock::Clock;
use apptcal_core::upcoming::upcoming;
use owo_colors::OwoColorize;

use crate::render::render_card;
use crate::session::Session;

/// Render the upcoming list, earliest first.
pub fn run<C: Clock>(session: &Session<C>, search: Option<&str>) -> String {
    let filter = session.filter(search);
    let list = upcoming(
        &session.store,
        session.today(),
        &filter,
        &session.doctors,
        &session.patients,
    );

    let mut lines = vec!["Upcoming Appointments".bold().to_string()];
    if list.is_empty() {
        lines.push("No upcoming appointments".dimmed().to_string());
        return lines.join("\n");
    }

    let names = session.names();
    lines.extend(list.iter().map(|apt| render_card(apt, &names)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use apptcal_core::appointment::AppointmentDraft;
    use apptcal_core::clock::FixedClock;
    use apptcal_core::config::SchedulerConfig;
    use chrono::{NaiveDate, NaiveTime};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn insert(session: &mut Session<FixedClock>, patient: &str, start: NaiveDate, description: Option<&str>) {
        session.store.insert(AppointmentDraft {
            doctor_id: "2".to_string(),
            patient_id: patient.to_string(),
            start_date: start,
            end_date: start,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            description: description.map(str::to_string),
        });
    }

    #[test]
    fn lists_future_appointments_in_date_order() {
        let mut session = Session::new(&SchedulerConfig::default(), FixedClock(ymd(2026, 10, 19))).unwrap();
        insert(&mut session, "3", ymd(2026, 11, 5), Some("Vaccination"));
        insert(&mut session, "1", ymd(2026, 10, 19), None);
        insert(&mut session, "2", ymd(2026, 10, 25), None);

        let out = run(&session, None);
        let maria = out.find("Maria Garcia").unwrap();
        let robert = out.find("Robert Johnson").unwrap();

        assert!(maria < robert, "earlier appointment should come first:\n{}", out);
        assert!(!out.contains("James Wilson"), "today's appointment is not upcoming");
        assert!(out.contains("Vaccination"));
        assert!(out.contains("Nov 05, 2026"));
    }

    #[test]
    fn empty_list_says_so() {
        let session = Session::new(&SchedulerConfig::default(), FixedClock(ymd(2026, 10, 19))).unwrap();
        assert!(run(&session, None).contains("No upcoming appointments"));
    }
}

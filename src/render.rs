//! Terminal rendering for apptcal types.
//!
//! Extension traits and helpers that turn core values into colored lines
//! using owo_colors.

use apptcal_core::appointment::Appointment;
use apptcal_core::directory::{Catalog, Directory, Doctor, Patient};
use apptcal_core::grid::{GridCell, MonthGrid};
use apptcal_core::index::{ActiveAppointment, DayCell};
use apptcal_core::notify::{Notification, NotificationKind};
use owo_colors::OwoColorize;
use tracing::warn;

/// Width of one month-grid column, including spacing
const CELL_WIDTH: usize = 5;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Notification {
    fn render(&self) -> String {
        match self.kind {
            NotificationKind::Success => format!("✔ {}", self.message).green().to_string(),
            NotificationKind::Failure => format!("✘ {}", self.message).red().to_string(),
        }
    }
}

/// Resolves appointment ids to display names, with placeholders for
/// ids the directories don't know.
pub struct Names<'a> {
    pub doctors: &'a Catalog<Doctor>,
    pub patients: &'a Catalog<Patient>,
}

impl<'a> Names<'a> {
    pub fn doctor(&self, appointment: &Appointment) -> &'a str {
        self.doctors.name_of(&appointment.doctor_id).unwrap_or_else(|| {
            warn!(id = %appointment.id, doctor = %appointment.doctor_id, "unknown doctor");
            "Unknown doctor"
        })
    }

    pub fn patient(&self, appointment: &Appointment) -> &'a str {
        self.patients.name_of(&appointment.patient_id).unwrap_or_else(|| {
            warn!(id = %appointment.id, patient = %appointment.patient_id, "unknown patient");
            "Unknown patient"
        })
    }
}

/// "Oct 20, 2026"
fn format_day(day: chrono::NaiveDate) -> String {
    day.format("%b %d, %Y").to_string()
}

/// Upcoming-list card: who, when, and the description if any.
pub fn render_card(appointment: &Appointment, names: &Names) -> String {
    let mut when = format!(
        "{} - {}",
        appointment.start_time.format("%H:%M"),
        format_day(appointment.start_date)
    );
    if appointment.is_multi_day() {
        when.push_str(&format!(" to {}", format_day(appointment.end_date)));
    }

    let mut lines = vec![
        format!(
            "{} {} with {}",
            format!("#{}", appointment.id).dimmed(),
            names.patient(appointment).bold(),
            names.doctor(appointment)
        ),
        format!("   {}", when),
    ];
    if let Some(description) = &appointment.description {
        lines.push(format!("   {}", description.dimmed()));
    }
    lines.join("\n")
}

/// One appointment inside a day: start time on its first day, a
/// continuation marker on the others.
pub fn render_badge(active: &ActiveAppointment, names: &Names) -> String {
    let apt = active.appointment;
    let time = if active.is_first_day {
        apt.start_time.format("%H:%M").to_string()
    } else {
        "  ···".dimmed().to_string()
    };

    format!(
        "{} {} · {} {}",
        time,
        names.patient(apt),
        names.doctor(apt),
        format!("#{}", apt.id).dimmed()
    )
}

fn render_cell(cell: &DayCell) -> String {
    let GridCell::Day(day) = cell.cell else {
        return " ".repeat(CELL_WIDTH);
    };

    let marker = if cell.appointments.is_empty() { " " } else { "•" };
    let text = format!("{:>3}{} ", chrono::Datelike::day(&day), marker);

    if cell.is_today {
        text.purple().bold().to_string()
    } else if cell.is_past {
        text.dimmed().to_string()
    } else {
        text
    }
}

/// The month grid followed by the appointments of each busy day.
pub fn render_month(grid: &MonthGrid, view: &[DayCell], names: &Names) -> String {
    let mut lines = vec![grid.title().bold().to_string()];

    lines.push(
        grid.weekday_labels()
            .iter()
            .map(|label| format!("{:>4} ", label))
            .collect::<String>()
            .dimmed()
            .to_string(),
    );

    for week in view.chunks(7) {
        lines.push(week.iter().map(render_cell).collect::<String>().trim_end().to_string());
    }

    for cell in view.iter().filter(|c| !c.appointments.is_empty()) {
        let Some(day) = cell.cell.date() else { continue };
        lines.push(String::new());
        lines.push(day.format("%a %b %-d").to_string().bold().to_string());
        for active in &cell.appointments {
            lines.push(format!("  {}", render_badge(active, names)));
        }
    }

    lines.join("\n")
}

pub fn render_doctor(doctor: &Doctor) -> String {
    format!("{:>4}  {} {}", doctor.id, doctor.name, format!("({})", doctor.specialty).dimmed())
}

pub fn render_patient(patient: &Patient) -> String {
    format!("{:>4}  {}", patient.id, patient.name)
}

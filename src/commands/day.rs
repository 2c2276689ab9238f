use anyhow::Result;
use apptcal_core::clock::Clock;
use apptcal_core::index::AppointmentIndex;
use owo_colors::OwoColorize;

use crate::render::render_badge;
use crate::session::Session;
use crate::utils::dates::parse_day_input;

/// List the appointments active on one day.
pub fn run<C: Clock>(session: &Session<C>, day: &str, search: Option<&str>) -> Result<String> {
    let day = parse_day_input(day)?;
    let filter = session.filter(search);

    let active = AppointmentIndex::new(&session.store).active_on_matching(
        day,
        &filter,
        &session.doctors,
        &session.patients,
    );

    let mut lines = vec![day.format("%A %B %-d, %Y").to_string().bold().to_string()];
    if active.is_empty() {
        lines.push("  No appointments".dimmed().to_string());
    }

    let names = session.names();
    lines.extend(active.iter().map(|a| format!("  {}", render_badge(a, &names))));

    Ok(lines.join("\n"))
}

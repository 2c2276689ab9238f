use anyhow::Result;
use apptcal_core::clock::Clock;
use apptcal_core::grid::MonthGrid;
use apptcal_core::index::AppointmentIndex;

use crate::render::render_month;
use crate::session::Session;
use crate::utils::dates::parse_month;

/// Resolve which month to show: the current one, "next", "prev", "today",
/// or an explicit YYYY-MM.
fn resolve_month<C: Clock>(session: &Session<C>, target: Option<&str>) -> Result<MonthGrid> {
    let week_start = session.grid.week_start();

    let grid = match target {
        None => session.grid,
        Some("next") => session.grid.next_month()?,
        Some("prev") => session.grid.prev_month()?,
        Some("today") => MonthGrid::containing(session.today())?.with_week_start(week_start),
        Some(s) => parse_month(s)?.with_week_start(week_start),
    };

    Ok(grid)
}

/// Move to the requested month and render it.
pub fn run<C: Clock>(session: &mut Session<C>, target: Option<&str>, search: Option<&str>) -> Result<String> {
    session.grid = resolve_month(session, target)?;

    let filter = session.filter(search);
    let view = AppointmentIndex::new(&session.store).month_view(
        &session.grid,
        session.today(),
        &filter,
        &session.doctors,
        &session.patients,
    );

    Ok(render_month(&session.grid, &view, &session.names()))
}

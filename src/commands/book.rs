use anyhow::Result;
use apptcal_core::appointment::{default_start_time, AppointmentDraft, AppointmentId};
use apptcal_core::booking::{book_and_notify, Candidate};
use apptcal_core::clock::Clock;
use apptcal_core::directory::{Catalog, Directory, Named};
use clap::Args;
use dialoguer::Select;

use crate::render::Render;
use crate::session::Session;
use crate::utils::dates::{apply_span_length, parse_day_input, parse_end, parse_time};

/// Fields of the booking form. Anything left out falls back to a default
/// (new booking) or to the existing value (edit).
#[derive(Args, Debug, Default, Clone)]
pub struct BookArgs {
    /// Doctor id
    #[arg(short, long)]
    pub doctor: Option<String>,

    /// Patient id
    #[arg(short, long)]
    pub patient: Option<String>,

    /// First day (YYYY-MM-DD, or e.g. "tomorrow")
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last day, inclusive
    #[arg(short, long, conflicts_with = "duration")]
    pub end: Option<String>,

    /// Length of the span instead of an end day (e.g. "3days")
    #[arg(long)]
    pub duration: Option<String>,

    /// Start time on the first day (HH:MM)
    #[arg(short, long)]
    pub time: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

/// Book a new appointment.
pub fn create<C: Clock>(session: &mut Session<C>, args: BookArgs, interactive: bool) -> Result<String> {
    let doctor_id = match args.doctor {
        Some(id) => id,
        None if interactive => pick("  Doctor", &session.doctors, |d| format!("{} ({})", d.name, d.specialty))?,
        None => anyhow::bail!("Missing --doctor. See `doctors` for ids."),
    };
    let patient_id = match args.patient {
        Some(id) => id,
        None if interactive => pick("  Patient", &session.patients, |p| p.name.clone())?,
        None => anyhow::bail!("Missing --patient. See `patients` for ids."),
    };
    require_known(&session.doctors, &doctor_id, "doctor")?;
    require_known(&session.patients, &patient_id, "patient")?;

    let start_date = match &args.start {
        Some(s) => parse_day_input(s)?,
        None => session.today(),
    };
    let end_date = match (&args.end, &args.duration) {
        (Some(e), _) => parse_end(e, start_date)?,
        (None, Some(d)) => apply_span_length(start_date, d)?,
        (None, None) => start_date,
    };
    let start_time = match &args.time {
        Some(t) => parse_time(t)?,
        None => default_start_time(),
    };

    let draft = AppointmentDraft {
        doctor_id,
        patient_id,
        start_date,
        end_date,
        start_time,
        description: non_empty(args.description),
    };

    submit(session, Candidate::new(draft))
}

/// Replace an existing appointment, keeping whatever wasn't given.
pub fn edit<C: Clock>(session: &mut Session<C>, id: u64, args: BookArgs) -> Result<String> {
    let id = AppointmentId(id);
    let Some(existing) = session.store.get(id) else {
        anyhow::bail!("Appointment #{} not found", id);
    };
    let mut draft = existing.to_draft();

    if let Some(doctor_id) = args.doctor {
        require_known(&session.doctors, &doctor_id, "doctor")?;
        draft.doctor_id = doctor_id;
    }
    if let Some(patient_id) = args.patient {
        require_known(&session.patients, &patient_id, "patient")?;
        draft.patient_id = patient_id;
    }
    if let Some(s) = &args.start {
        draft.start_date = parse_day_input(s)?;
    }
    if let Some(e) = &args.end {
        draft.end_date = parse_end(e, draft.start_date)?;
    } else if let Some(d) = &args.duration {
        draft.end_date = apply_span_length(draft.start_date, d)?;
    }
    if let Some(t) = &args.time {
        draft.start_time = parse_time(t)?;
    }
    if args.description.is_some() {
        draft.description = non_empty(args.description);
    }

    submit(session, Candidate::edit(id, draft))
}

/// Run the booking and report the notification it produced. Validation
/// failures are reported, not raised.
fn submit<C: Clock>(session: &mut Session<C>, candidate: Candidate) -> Result<String> {
    match book_and_notify(&mut session.store, candidate, &session.clock, &mut session.banner) {
        Ok(_) => {}
        Err(e) if e.is_validation() => {}
        Err(e) => return Err(e.into()),
    }

    Ok(session
        .banner
        .latest()
        .map(|n| n.render())
        .unwrap_or_default())
}

fn require_known<T: Named>(directory: &Catalog<T>, id: &str, what: &str) -> Result<()> {
    if directory.lookup(id).is_some() {
        return Ok(());
    }

    let available: Vec<_> = directory.entries().iter().map(|e| e.id()).collect();
    anyhow::bail!("Unknown {} id '{}'. Available: {}", what, id, available.join(", "))
}

fn pick<T: Named>(prompt: &str, directory: &Catalog<T>, label: impl Fn(&T) -> String) -> Result<String> {
    if directory.is_empty() {
        anyhow::bail!("Nothing to choose from: the directory is empty");
    }

    let items: Vec<String> = directory.entries().iter().map(&label).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(directory.entries()[selection].id().to_string())
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

//! State of one interactive session.
//!
//! The session owns the appointment store and hands out borrows of it to
//! the query functions. Nothing outlives the process.

use std::time::{Duration, Instant};

use anyhow::Result;
use apptcal_core::clock::Clock;
use apptcal_core::config::SchedulerConfig;
use apptcal_core::directory::{Catalog, Doctor, Patient};
use apptcal_core::grid::MonthGrid;
use apptcal_core::notify::{Notification, NotificationSink};
use apptcal_core::search::SearchFilter;
use apptcal_core::store::AppointmentStore;
use chrono::NaiveDate;

use crate::render::Names;

/// Keeps the latest notification visible until its time-to-live runs out.
pub struct Banner {
    latest: Option<(Notification, Instant)>,
    ttl: Duration,
}

impl Banner {
    pub fn new(ttl: Duration) -> Self {
        Banner { latest: None, ttl }
    }

    /// The latest notification, unless it has expired.
    pub fn current(&self) -> Option<&Notification> {
        self.latest
            .as_ref()
            .filter(|(_, shown_at)| shown_at.elapsed() < self.ttl)
            .map(|(notification, _)| notification)
    }

    /// The latest notification regardless of age.
    pub fn latest(&self) -> Option<&Notification> {
        self.latest.as_ref().map(|(notification, _)| notification)
    }
}

impl NotificationSink for Banner {
    fn notify(&mut self, notification: Notification) {
        self.latest = Some((notification, Instant::now()));
    }
}

pub struct Session<C: Clock> {
    pub store: AppointmentStore,
    pub doctors: Catalog<Doctor>,
    pub patients: Catalog<Patient>,
    pub clock: C,
    pub banner: Banner,
    /// Month shown by `month` without arguments
    pub grid: MonthGrid,
    /// Standing search query, like the search box of a calendar UI
    pub search: String,
}

impl<C: Clock> Session<C> {
    pub fn new(config: &SchedulerConfig, clock: C) -> Result<Self> {
        let grid = MonthGrid::containing(clock.today())?.with_week_start(config.week_start.weekday());

        Ok(Session {
            store: AppointmentStore::new(),
            doctors: config.doctor_directory(),
            patients: config.patient_directory(),
            banner: Banner::new(config.notification_ttl()?),
            clock,
            grid,
            search: String::new(),
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn names(&self) -> Names<'_> {
        Names {
            doctors: &self.doctors,
            patients: &self.patients,
        }
    }

    /// The filter for a command: its own `--search` if given, else the
    /// standing query.
    pub fn filter(&self, search: Option<&str>) -> SearchFilter {
        SearchFilter::new(search.unwrap_or(&self.search))
    }
}

//! Appointment calendar engine.
//!
//! - `date_range` and `grid`: calendar-day spans and month layouts
//! - `store`: the owned appointment collection, the only mutable state
//! - `index`, `search`, `upcoming`: read-only views recomputed on every call
//! - `booking`: validation in front of the store
//! - `directory`, `clock`, `notify`: collaborators supplied by the front end

pub mod appointment;
pub mod booking;
pub mod clock;
pub mod config;
pub mod date_range;
pub mod directory;
pub mod error;
pub mod grid;
pub mod index;
pub mod notify;
pub mod search;
pub mod store;
pub mod upcoming;

pub use appointment::{Appointment, AppointmentDraft, AppointmentId};
pub use error::{SchedulerError, SchedulerResult};
pub use store::AppointmentStore;

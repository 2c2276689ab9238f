//! Read-only doctor and patient directories.
//!
//! Appointments only hold opaque ids. Lookups of unknown ids return `None`;
//! callers degrade to a placeholder or a non-match instead of failing.

use serde::{Deserialize, Serialize};

/// An entry that can be found by id and shown by name.
pub trait Named {
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
}

/// Id → entry lookup.
pub trait Directory<T: Named> {
    fn lookup(&self, id: &str) -> Option<&T>;

    fn name_of<'a>(&'a self, id: &str) -> Option<&'a str>
    where
        T: 'a,
    {
        self.lookup(id).map(Named::display_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    /// Display only
    pub specialty: String,
}

impl Named for Doctor {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
}

impl Named for Patient {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// A directory backed by a list, in listing order.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    entries: Vec<T>,
}

impl<T: Named> Catalog<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Catalog { entries }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Named> Directory<T> for Catalog<T> {
    fn lookup(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }
}

fn doctor(id: &str, name: &str, specialty: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
    }
}

fn patient(id: &str, name: &str) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Built-in doctors used when the config file lists none.
pub fn default_doctors() -> Vec<Doctor> {
    vec![
        doctor("1", "Dr. Sarah Smith", "Cardiologist"),
        doctor("2", "Dr. John Doe", "Pediatrician"),
        doctor("3", "Dr. Emily Brown", "Neurologist"),
    ]
}

/// Built-in patients used when the config file lists none.
pub fn default_patients() -> Vec<Patient> {
    vec![
        patient("1", "James Wilson"),
        patient("2", "Maria Garcia"),
        patient("3", "Robert Johnson"),
    ]
}

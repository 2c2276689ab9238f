use apptcal_core::directory::{Catalog, Doctor, Patient};
use owo_colors::OwoColorize;

use crate::render::{render_doctor, render_patient};

pub fn render_doctors(doctors: &Catalog<Doctor>) -> String {
    if doctors.is_empty() {
        return "No doctors configured".dimmed().to_string();
    }
    doctors.entries().iter().map(render_doctor).collect::<Vec<_>>().join("\n")
}

pub fn render_patients(patients: &Catalog<Patient>) -> String {
    if patients.is_empty() {
        return "No patients configured".dimmed().to_string();
    }
    patients.entries().iter().map(render_patient).collect::<Vec<_>>().join("\n")
}

pub fn doctors(doctors: &Catalog<Doctor>) {
    println!("{}", render_doctors(doctors));
}

pub fn patients(patients: &Catalog<Patient>) {
    println!("{}", render_patients(patients));
}

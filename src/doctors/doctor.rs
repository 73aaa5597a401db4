use crate::errors::error_types::ErrorTypes;
use serde::Deserialize;
use std::fs;
use walkers::Position;

/// Default location of the doctor seed data, relative to the working directory.
pub const DOCTORS_FILE: &str = "doctors.json";

#[derive(Debug, Deserialize, Clone, PartialEq)]
/// Represents a doctor available for consultation.
///
/// The `id` is unique and stable across renders; it is the durable key for the
/// doctor's marker on the map. `lat`/`lng` never change once loaded.
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub rating: f64,
    pub distance: String,
    pub lat: f64,
    pub lng: f64,
    pub phone: String,
    pub address: String,
}

impl Doctor {
    /// The geographic anchor of this doctor's marker.
    pub fn position(&self) -> Position {
        Position::from_lon_lat(self.lng, self.lat)
    }
}

/// Loads the doctor list from a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file containing an array of doctors.
///
/// # Returns
/// `Vec<Doctor>` - The parsed list, or an error if the file cannot be read or parsed.
pub fn load_doctors(path: &str) -> Result<Vec<Doctor>, ErrorTypes> {
    let data = fs::read_to_string(path)
        .map_err(|e| ErrorTypes::new(101, format!("Error reading {}: {}", path, e)))?;
    serde_json::from_str(&data)
        .map_err(|e| ErrorTypes::new(102, format!("Error parsing {}: {}", path, e)))
}

/// Returns the doctors whose specialty matches the filter, preserving order.
///
/// A filter of `None` means "all specialties". The source list is never
/// mutated; the result holds clones of the matching records.
pub fn filter_by_specialty(doctors: &[Doctor], specialty: Option<&str>) -> Vec<Doctor> {
    match specialty {
        None => doctors.to_vec(),
        Some(wanted) => doctors
            .iter()
            .filter(|doctor| doctor.specialty == wanted)
            .cloned()
            .collect(),
    }
}

/// Returns the distinct specialties present in the list, in first-seen order.
pub fn specialties(doctors: &[Doctor]) -> Vec<String> {
    let mut seen = Vec::new();
    for doctor in doctors {
        if !seen.contains(&doctor.specialty) {
            seen.push(doctor.specialty.clone());
        }
    }
    seen
}

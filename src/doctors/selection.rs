use super::doctor::Doctor;

/// Single source of truth for which doctor is currently selected, plus the
/// active specialty filter.
///
/// Changing the filter never touches the selection: a doctor stays selected
/// even when the filter removes their marker from the map, so the detail
/// panel keeps showing the doctor being reviewed. The only ways a selection
/// goes away are a new selection or an explicit `clear`.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<Doctor>,
    specialty_filter: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection to the given doctor.
    pub fn select(&mut self, doctor: Doctor) {
        self.selected = Some(doctor);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Gets the currently selected doctor, if any.
    pub fn selected(&self) -> Option<&Doctor> {
        self.selected.as_ref()
    }

    /// Sets the active specialty filter. `None` shows every specialty.
    pub fn set_specialty_filter(&mut self, specialty: Option<String>) {
        self.specialty_filter = specialty;
    }

    pub fn specialty_filter(&self) -> Option<&str> {
        self.specialty_filter.as_deref()
    }
}

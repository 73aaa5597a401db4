use egui::Ui;
use threadpool::ThreadPool;

use crate::doctors::doctor::{
    filter_by_specialty, load_doctors, specialties, Doctor, DOCTORS_FILE,
};
use crate::doctors::selection::SelectionState;
use crate::map::handle::MapHandle;
use crate::map::places;
use crate::map::tile_engine::TileMapEngine;

use super::windows;

/// The "Consult a Doctor" page: owns the doctor list, the selection state,
/// and the map handle for the current visit.
///
/// The handle is mounted on the first frame the page is shown, once a live
/// surface exists, and unmounted when the user navigates away, so every
/// visit gets a fresh engine and no engine outlives its page.
pub struct DoctorsPage {
    doctors: Vec<Doctor>,
    selection: SelectionState,
    map: Option<MapHandle>,
    call_status: Option<String>,
}

impl DoctorsPage {
    pub fn new() -> Self {
        let doctors = match load_doctors(DOCTORS_FILE) {
            Ok(doctors) => doctors,
            Err(e) => {
                eprintln!("Failed to load doctors: {:?}", e);
                Vec::new()
            }
        };
        println!("Loaded {} doctors", doctors.len());
        Self {
            doctors,
            selection: SelectionState::new(),
            map: None,
            call_status: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, pool: &ThreadPool) {
        ui.heading("Consult a Doctor");
        ui.label("Find and call qualified doctors near you in Nagpur");
        ui.add_space(8.0);

        self.filter_ui(ui);
        ui.add_space(8.0);

        let filtered = filter_by_specialty(&self.doctors, self.selection.specialty_filter());

        let egui_ctx = ui.ctx().clone();
        let map = self.map.get_or_insert_with(|| {
            MapHandle::mount(
                pool,
                TileMapEngine::builder(egui_ctx, places::nagpur_center()),
            )
        });

        map.render(&filtered);

        let mut activated = Vec::new();
        map.poll(&filtered, &mut |doctor| activated.push(doctor));

        map.show(ui);

        for doctor in activated {
            self.selection.select(doctor);
        }

        windows::doctor_details(ui, &mut self.selection, &mut self.call_status);
    }

    fn filter_ui(&mut self, ui: &mut Ui) {
        let all = specialties(&self.doctors);
        let selected_text = self
            .selection
            .specialty_filter()
            .unwrap_or("All Specialties")
            .to_string();

        egui::ComboBox::from_label("Filter by Specialty")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                let mut picked: Option<Option<String>> = None;
                if ui
                    .selectable_label(self.selection.specialty_filter().is_none(), "All Specialties")
                    .clicked()
                {
                    picked = Some(None);
                }
                for specialty in &all {
                    let active = self.selection.specialty_filter() == Some(specialty.as_str());
                    if ui.selectable_label(active, specialty).clicked() {
                        picked = Some(Some(specialty.clone()));
                    }
                }
                // A filter change never clears the selection; the detail
                // panel keeps showing the doctor under review.
                if let Some(filter) = picked {
                    self.selection.set_specialty_filter(filter);
                }
            });
    }

    /// Releases the map for this visit. Safe to call when no map is mounted.
    pub fn unmount_map(&mut self) {
        if let Some(map) = self.map.as_mut() {
            map.unmount();
        }
        self.map = None;
    }
}

impl Default for DoctorsPage {
    fn default() -> Self {
        Self::new()
    }
}

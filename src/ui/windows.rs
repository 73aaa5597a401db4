use egui::{Align2, Color32, RichText, Ui, Window};

use crate::doctors::selection::SelectionState;

/// Shows the detail panel for the selected doctor, or a placeholder when
/// nothing is selected.
///
/// Renders purely from the selection state; the panel keeps showing a doctor
/// whose marker the specialty filter has removed from the map.
pub fn doctor_details(ui: &Ui, selection: &mut SelectionState, call_status: &mut Option<String>) {
    let doctor = match selection.selected() {
        Some(doctor) => doctor.clone(),
        None => {
            Window::new("Select a Doctor")
                .collapsible(false)
                .resizable(false)
                .title_bar(false)
                .anchor(Align2::RIGHT_TOP, [-10., 10.])
                .show(ui.ctx(), |ui| {
                    ui.label(RichText::new("Select a Doctor").size(18.0));
                    ui.separator();
                    ui.label("Click on a doctor marker on the map to view details and call them directly.");
                });
            return;
        }
    };

    Window::new("Doctor Information")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_TOP, [-10., 10.])
        .show(ui.ctx(), |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&doctor.name).size(18.0));
                ui.label(&doctor.specialty);
                ui.separator();
                ui.label(format!("Address: {}", doctor.address));
                ui.label(format!("Distance: {}", doctor.distance));
                ui.label(format!("Rating: {:.1}/5", doctor.rating));
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button(format!("Call {}", doctor.phone)).clicked() {
                        *call_status = Some(format!("Calling {}...", doctor.phone));
                    }
                    if ui.button("Close").clicked() {
                        selection.clear();
                        *call_status = None;
                    }
                });
                if let Some(status) = call_status {
                    ui.label(RichText::new(status.as_str()).color(Color32::DARK_GREEN));
                }
            });
        });
}

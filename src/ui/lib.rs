use egui::{Context, RichText};
use threadpool::ThreadPool;

use super::map_page::DoctorsPage;
use super::predict_page::PredictPage;

/// Worker threads shared by the map engine loader and classifier requests.
const WORKERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Prediction,
    Doctors,
    About,
}

/// Main application structure.
pub struct MyApp {
    page: Page,
    pool: ThreadPool,
    predict_page: PredictPage,
    doctors_page: DoctorsPage,
}

impl MyApp {
    /// Creates a new instance of `MyApp`.
    ///
    /// # Arguments
    /// * `egui_ctx` - The Egui context.
    ///
    /// # Returns
    /// `MyApp` - A new instance of `MyApp`.
    pub fn new(egui_ctx: Context) -> Self {
        egui_extras::install_image_loaders(&egui_ctx);

        Self {
            page: Page::Prediction,
            pool: ThreadPool::new(WORKERS),
            predict_page: PredictPage::new(),
            doctors_page: DoctorsPage::new(),
        }
    }
}

impl eframe::App for MyApp {
    /// Updates the application state.
    ///
    /// # Arguments
    /// * `ctx` - The Egui context.
    /// * `_frame` - The Eframe frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut next_page = self.page;

        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("HealthPredict").heading().strong());
                ui.separator();
                if ui
                    .selectable_label(self.page == Page::Prediction, "Health Prediction")
                    .clicked()
                {
                    next_page = Page::Prediction;
                }
                if ui
                    .selectable_label(self.page == Page::Doctors, "Consult Doctor")
                    .clicked()
                {
                    next_page = Page::Doctors;
                }
                if ui.selectable_label(self.page == Page::About, "About").clicked() {
                    next_page = Page::About;
                }
            });
        });

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default().frame(rimless).show(ctx, |ui| {
            match self.page {
                Page::Prediction => {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        if self.predict_page.ui(ui, &self.pool) {
                            next_page = Page::Doctors;
                        }
                    });
                }
                Page::Doctors => self.doctors_page.ui(ui, &self.pool),
                Page::About => about_ui(ui),
            }
        });

        if next_page != self.page {
            // Leaving the doctors page releases its map engine; the next
            // visit mounts a fresh one.
            if self.page == Page::Doctors {
                self.doctors_page.unmount_map();
            }
            self.page = next_page;
        }
    }
}

fn about_ui(ui: &mut egui::Ui) {
    ui.heading("About HealthPredict");
    ui.add_space(8.0);
    ui.label(
        "This AI-powered healthcare prediction platform was developed to help users get quick \
         health insights and connect with nearby medical professionals. The system uses machine \
         learning to analyze genetic variant parameters and provide preliminary health \
         assessments.",
    );
    ui.add_space(8.0);
    ui.label(
        "Predictions are informational only and never a substitute for a consultation with a \
         qualified doctor.",
    );
}

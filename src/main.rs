use salud_rustica::ui::lib::MyApp;

fn main() {
    env_logger::init();
    let _ = eframe::run_native(
        "HealthPredict",
        Default::default(),
        Box::new(|cc| Ok(Box::new(MyApp::new(cc.egui_ctx.clone())))),
    );
}

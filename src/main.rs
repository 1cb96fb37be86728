mod engine;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "HashPals",
        options,
        Box::new(|_cc| Ok(Box::new(ui::app::PetApp::new()))),
    )
}

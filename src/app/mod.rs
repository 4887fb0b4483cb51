//! Application entry point wiring egui/eframe to launch the job board UI.

use eframe::egui;
use egui_phosphor::Variant;

use crate::logic::storage::Storage;
use crate::ui::FreelanceJoApp;

/// Identifier used for the on-disk storage location.
const APP_ID: &str = "freelancejo";

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let storage = Storage::open(
        eframe::storage_dir(APP_ID).unwrap_or_else(|| std::env::temp_dir().join(APP_ID)),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 780.0])
            .with_min_inner_size([380.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Freelance Jo",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(FreelanceJoApp::new(storage)))
        }),
    )
}

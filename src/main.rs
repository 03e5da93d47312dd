use egui::ViewportBuilder;

use namegen_core::platform::parameters::gui;
use namegen_core::{AppSettings, NameGenApp, TemplateList};

/// The main function is the entry point of the application.
///
/// It initializes the logger, reads the template file and runs the
/// application using the `eframe` framework. The template file is read
/// before any window opens; failing to read it ends the program.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = AppSettings::load_or_default();
    let templates = match TemplateList::load(&settings.template_path) {
        Ok(templates) => templates,
        Err(e) => {
            log::error!("{}", e);
            return Err(e.into());
        }
    };
    log::info!("Loaded {} templates from {}", templates.len(), settings.template_path.display());

    eframe::run_native(
        gui::APPLICATION_NAME,
        eframe::NativeOptions {
            viewport: ViewportBuilder::default().with_inner_size([gui::VIEWPORT_X, gui::VIEWPORT_Y]),
            ..Default::default()
        },
        Box::new(move |_cc| Ok(Box::new(NameGenApp::new(settings, templates)))),
    )?;

    Ok(())
}

use crate::NameGenApp;
use egui_lens::{ReactiveEventLogger, ReactiveEventLoggerState, LogColors};
use egui_mobius_reactive::Dynamic;

pub fn show_settings_panel<'a>(
    ui: &mut egui::Ui,
    app: &'a mut NameGenApp,
    logger_state: &'a Dynamic<ReactiveEventLoggerState>,
    log_colors: &'a Dynamic<LogColors>,
) {
    let logger = ReactiveEventLogger::with_colors(logger_state, log_colors);

    ui.heading("Application Settings");
    ui.separator();

    ui.group(|ui| {
        ui.label("Template File");
        ui.horizontal(|ui| {
            ui.label("Path:");
            ui.text_edit_singleline(&mut app.template_path_input);

            if ui.button("Browse...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Text Files", &["txt"])
                    .pick_file()
                {
                    logger.log_info(&format!("Selected template file: {}", path.display()));
                    app.template_path_input = path.display().to_string();
                }
            }
        });

        ui.horizontal(|ui| {
            let changed = app.template_path_input.trim() != app.settings.template_path.to_string_lossy();
            if ui.add_enabled(changed, egui::Button::new("Apply")).clicked() {
                app.apply_template_path(logger_state, log_colors);
            }
            if changed && ui.button("Revert").clicked() {
                app.template_path_input = app.settings.template_path.display().to_string();
            }
        });
        ui.label("Relative paths are resolved against the working directory");
    });
}

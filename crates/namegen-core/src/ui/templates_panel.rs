use crate::NameGenApp;
use egui_lens::{ReactiveEventLoggerState, LogColors};
use egui_mobius_reactive::Dynamic;

pub fn show_templates_panel<'a>(
    ui: &mut egui::Ui,
    app: &'a mut NameGenApp,
    logger_state: &'a Dynamic<ReactiveEventLoggerState>,
    log_colors: &'a Dynamic<LogColors>,
) {
    ui.heading("Templates");
    ui.separator();

    ui.horizontal(|ui| {
        let source = app.templates.source()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<none>".to_string());
        ui.label("Source:");
        ui.label(egui::RichText::new(source).strong());
        ui.label(format!("({} entries)", app.templates.len()));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🔄 Reload").clicked() {
                app.reload_templates(logger_state, log_colors);
            }
        });
    });

    ui.add_space(5.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("templates_grid")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("#");
                    ui.strong("Name text");
                    ui.strong("Explanation");
                    ui.end_row();

                    for (index, entry) in app.templates.entries().iter().enumerate() {
                        ui.label((index + 1).to_string());
                        ui.label(&entry.main_text);
                        ui.label(&entry.explanation);
                        ui.end_row();
                    }
                });
        });
}

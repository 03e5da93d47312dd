use crate::NameGenApp;
use crate::constants::{LOG_TYPE_CLIPBOARD, LOG_TYPE_GENERATE};
use crate::formatter::{FormatError, GeneratedEntry, NameRequest};
use crate::template::TemplateEntry;
use egui_lens::{ReactiveEventLogger, ReactiveEventLoggerState, LogColors};
use egui_mobius_reactive::Dynamic;

const INPUT_WIDTH: f32 = 350.0;
const EXPLANATION_MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(80, 140, 255);
const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 200, 0);

/// Inputs and the currently displayed results of the generator tab
#[derive(Debug, Default)]
pub struct GeneratorState {
    pub id_input: String,
    pub site_input: String,
    pub results: Vec<GeneratedEntry>,
    /// Set when a request was rejected, cleared when the warning is dismissed
    pub input_error: Option<FormatError>,
}

impl GeneratorState {
    /// Regenerate the result list from the current inputs.
    ///
    /// On success the previous results are replaced wholesale. On a rejected
    /// request they are left untouched and `input_error` is set.
    pub fn submit(&mut self, templates: &[TemplateEntry]) -> Result<usize, FormatError> {
        let request = NameRequest::new(&self.id_input, &self.site_input);
        match request.apply(templates) {
            Ok(results) => {
                self.results = results;
                self.input_error = None;
                Ok(self.results.len())
            }
            Err(e) => {
                self.input_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Bring the displayed results in line with a newly loaded template list.
    ///
    /// Results are regenerated when an ID has been entered and cleared
    /// otherwise, so no row survives from the previous list.
    pub fn refresh(&mut self, templates: &[TemplateEntry]) {
        let request = NameRequest::new(&self.id_input, &self.site_input);
        match request.apply(templates) {
            Ok(results) => self.results = results,
            Err(_) => self.results.clear(),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.input_error = None;
    }
}

pub fn show_generator_panel<'a>(
    ui: &mut egui::Ui,
    app: &'a mut NameGenApp,
    logger_state: &'a Dynamic<ReactiveEventLoggerState>,
    log_colors: &'a Dynamic<LogColors>,
) {
    let logger = ReactiveEventLogger::with_colors(logger_state, log_colors);

    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.label("Enter ID (e.g., 123456789_123456789):");
        let id_response = ui.add(
            egui::TextEdit::singleline(&mut app.generator.id_input).desired_width(INPUT_WIDTH),
        );

        ui.add_space(10.0);
        ui.label("Enter Site (optional):");
        let site_response = ui.add(
            egui::TextEdit::singleline(&mut app.generator.site_input).desired_width(INPUT_WIDTH),
        );

        ui.add_space(10.0);
        let enter_pressed = (id_response.lost_focus() || site_response.lost_focus())
            && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Update").clicked() || enter_pressed {
            app.update_list();
        }
        ui.add_space(10.0);
    });

    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in &app.generator.results {
                show_entry_row(ui, entry, &logger);
            }
        });
}

fn show_entry_row(ui: &mut egui::Ui, entry: &GeneratedEntry, logger: &ReactiveEventLogger) {
    ui.horizontal(|ui| {
        ui.label(&entry.name);

        if entry.has_explanation() {
            ui.label(egui::RichText::new("?").color(EXPLANATION_MARKER_COLOR).strong())
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .on_hover_text(&entry.explanation);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Copy").clicked() {
                ui.ctx().copy_text(entry.name.clone());
                logger.log_custom(LOG_TYPE_CLIPBOARD, &format!("Copied {}", entry.name));
            }
        });
    });
}

/// Show the Input Error warning while a rejected request is pending.
///
/// The warning is an `egui::Modal`, so the rest of the window is blocked
/// until it is dismissed with OK, Escape or a click on the backdrop.
/// Returns whether the warning was shown this frame.
pub fn show_input_error(ctx: &egui::Context, state: &mut GeneratorState) -> bool {
    let Some(error) = state.input_error.clone() else {
        return false;
    };

    let modal = egui::Modal::new(egui::Id::new("input_error_modal")).show(ctx, |ui| {
        ui.heading("Input Error");
        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("⚠").color(WARNING_COLOR).size(20.0));
            ui.label(error.to_string());
        });

        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.button("OK").clicked()
        })
        .inner
    });

    if modal.inner || modal.should_close() {
        state.dismiss_error();
    }
    true
}

/// Log the outcome of a generate request
pub(crate) fn log_submit(logger: &ReactiveEventLogger, outcome: &Result<usize, FormatError>) {
    match outcome {
        Ok(count) => logger.log_custom(LOG_TYPE_GENERATE, &format!("Generated {} names", count)),
        Err(e) => logger.log_warning(&format!("Input Error: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateList;

    #[test]
    fn test_submit_replaces_results() {
        let templates = TemplateList::parse("foo//bar\nbaz");
        let mut state = GeneratorState {
            id_input: "123".to_string(),
            ..Default::default()
        };

        assert_eq!(state.submit(templates.entries()), Ok(2));
        assert_eq!(state.results[0].name, "123_foo");

        state.site_input = "A".to_string();
        assert_eq!(state.submit(templates.entries()), Ok(2));
        assert_eq!(state.results[0].name, "123_A_foo");
        assert_eq!(state.results[1].name, "123_A_baz");
    }

    #[test]
    fn test_rejected_submit_keeps_previous_results() {
        let templates = TemplateList::parse("foo");
        let mut state = GeneratorState {
            id_input: "123".to_string(),
            ..Default::default()
        };
        state.submit(templates.entries()).unwrap();

        state.id_input = "   ".to_string();
        assert_eq!(state.submit(templates.entries()), Err(FormatError::MissingId));
        assert_eq!(state.input_error, Some(FormatError::MissingId));
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].name, "123_foo");

        state.dismiss_error();
        assert!(state.input_error.is_none());
    }

    #[test]
    fn test_refresh_follows_new_template_list() {
        let mut state = GeneratorState {
            id_input: "123".to_string(),
            ..Default::default()
        };
        state.submit(TemplateList::parse("a\nb\nc").entries()).unwrap();
        assert_eq!(state.results.len(), 3);

        let reloaded = TemplateList::parse("x//new");
        state.refresh(reloaded.entries());
        assert_eq!(state.results.len(), reloaded.len());
        assert_eq!(state.results[0].name, "123_x");
        assert!(state.input_error.is_none());

        state.id_input.clear();
        state.refresh(reloaded.entries());
        assert!(state.results.is_empty());
        assert!(state.input_error.is_none());
    }

    #[test]
    fn test_input_error_modal_stays_until_dismissed() {
        let ctx = egui::Context::default();
        let mut state = GeneratorState::default();
        assert!(state.submit(TemplateList::parse("foo").entries()).is_err());

        for _ in 0..2 {
            let mut shown = false;
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                shown = show_input_error(ctx, &mut state);
            });
            assert!(shown);
            assert_eq!(state.input_error, Some(FormatError::MissingId));
        }

        state.dismiss_error();
        let mut shown = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            shown = show_input_error(ctx, &mut state);
        });
        assert!(!shown);
    }

    #[test]
    fn test_rejected_first_submit_produces_nothing() {
        let templates = TemplateList::parse("foo");
        let mut state = GeneratorState::default();
        assert!(state.submit(templates.entries()).is_err());
        assert!(state.results.is_empty());
    }
}

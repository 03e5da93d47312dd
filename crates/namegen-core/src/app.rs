use std::fs;
use std::path::PathBuf;

use egui_dock::{DockArea, DockState, NodeIndex, Style};

/// egui_lens imports
use egui_lens::{ReactiveEventLogger, ReactiveEventLoggerState, LogColors};
use egui_mobius_reactive::*;

use crate::constants::DOCK_STATE_FILE_NAME;
use crate::settings::AppSettings;
use crate::template::TemplateList;
use crate::ui::{self, GeneratorState, Tab, TabKind, TabViewer, initialize_and_show_banner};

/// The main application struct
pub struct NameGenApp {
    // Templates loaded at startup, replaced only by an explicit reload
    pub templates: TemplateList,

    // ID/site inputs and the displayed names
    pub generator: GeneratorState,

    // Logger state and colors
    pub logger_state : Dynamic<ReactiveEventLoggerState>,
    pub log_colors   : Dynamic<LogColors>,

    // Persisted settings and the pending edit of the template path
    pub settings: AppSettings,
    pub template_path_input: String,

    // Dock state
    dock_state: DockState<Tab>,
}

impl Drop for NameGenApp {
    fn drop(&mut self) {
        // Save dock state when application closes
        self.save_dock_state();
        self.settings.save();
    }
}

impl NameGenApp {
    /// **Create a new instance of the NameGenApp**
    ///
    /// The template list must already be loaded; a missing template file is
    /// a startup failure handled by the caller. The dock layout is restored
    /// from the config directory when a saved one exists.
    pub fn new(settings: AppSettings, templates: TemplateList) -> Self {
        let logger_state = Dynamic::new(ReactiveEventLoggerState::new());
        let log_colors = Dynamic::new(LogColors::default());

        let dock_state = Self::load_dock_state().unwrap_or_else(Self::default_dock_state);

        let app = Self {
            templates,
            generator: GeneratorState::default(),
            logger_state,
            log_colors,
            template_path_input: settings.template_path.display().to_string(),
            settings,
            dock_state,
        };

        let logger = ReactiveEventLogger::with_colors(&app.logger_state, &app.log_colors);
        initialize_and_show_banner(&logger, &app.templates);

        app
    }

    fn default_dock_state() -> DockState<Tab> {
        let generator_tab = Tab::new(TabKind::Generator);
        let templates_tab = Tab::new(TabKind::Templates);
        let settings_tab = Tab::new(TabKind::Settings);
        let log_tab = Tab::new(TabKind::EventLog);

        let mut dock_state = DockState::new(vec![generator_tab, templates_tab, settings_tab]);
        let surface = dock_state.main_surface_mut();

        // Event log along the bottom
        surface.split_below(
            NodeIndex::root(),
            0.75, // Top takes 75% of height
            vec![log_tab],
        );

        dock_state
    }

    /// Regenerate the displayed names from the ID and site inputs
    pub fn update_list(&mut self) {
        let logger = ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors);
        let outcome = self.generator.submit(self.templates.entries());
        ui::generator_panel::log_submit(&logger, &outcome);
    }

    /// Re-read the current template file, keeping the old list on failure
    pub fn reload_templates(
        &mut self,
        logger_state: &Dynamic<ReactiveEventLoggerState>,
        log_colors: &Dynamic<LogColors>,
    ) {
        let logger = ReactiveEventLogger::with_colors(logger_state, log_colors);
        match self.templates.reload() {
            Ok(()) => {
                self.generator.refresh(self.templates.entries());
                logger.log_info(&format!("Reloaded {} templates", self.templates.len()));
            }
            Err(e) => logger.log_error(&e.to_string()),
        }
    }

    /// Switch to the template file entered in the settings tab
    pub fn apply_template_path(
        &mut self,
        logger_state: &Dynamic<ReactiveEventLoggerState>,
        log_colors: &Dynamic<LogColors>,
    ) {
        let logger = ReactiveEventLogger::with_colors(logger_state, log_colors);
        let path = PathBuf::from(self.template_path_input.trim());

        match TemplateList::load(&path) {
            Ok(templates) => {
                logger.log_info(&format!(
                    "Loaded {} templates from {}",
                    templates.len(),
                    path.display()
                ));
                self.templates = templates;
                self.generator.refresh(self.templates.entries());
                self.settings.template_path = path;
                self.settings.save();
            }
            Err(e) => {
                logger.log_error(&format!("{} (keeping current templates)", e));
            }
        }
    }
}

impl NameGenApp {
    fn save_dock_state(&self) {
        if let Some(config_dir) = AppSettings::config_dir() {
            if let Err(e) = fs::create_dir_all(&config_dir) {
                log::error!("Failed to create config directory: {}", e);
                return;
            }
            let config_path = config_dir.join(DOCK_STATE_FILE_NAME);
            match serde_json::to_string_pretty(&self.dock_state) {
                Ok(json) => {
                    if let Err(e) = fs::write(&config_path, json) {
                        log::error!("Failed to write dock state: {}", e);
                    }
                }
                Err(e) => {
                    log::error!("Failed to serialize dock state: {}", e);
                }
            }
        }
    }

    fn load_dock_state() -> Option<DockState<Tab>> {
        let config_path = AppSettings::config_dir()?.join(DOCK_STATE_FILE_NAME);
        let json = fs::read_to_string(&config_path).ok()?;
        match serde_json::from_str::<DockState<Tab>>(&json) {
            Ok(dock_state) => Some(dock_state),
            Err(e) => {
                log::warn!("Failed to deserialize dock state: {}", e);
                // Delete corrupted file
                fs::remove_file(config_path).ok();
                None
            }
        }
    }
}

/// Implement the eframe::App trait for NameGenApp
///
/// Lays out the dock area every frame and shows the input warning on top
/// of it while a rejected request is pending.
impl eframe::App for NameGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut dock_state = self.dock_state.clone();
        let mut tab_viewer = TabViewer { app: self };
        let mut style = Style::from_egui(ctx.style().as_ref());
        style.dock_area_padding = None;
        style.tab_bar.fill_tab_bar = true;

        DockArea::new(&mut dock_state)
            .style(style)
            .show_add_buttons(false)
            .show_close_buttons(false)
            .show(ctx, &mut tab_viewer);

        self.dock_state = dock_state;

        ui::generator_panel::show_input_error(ctx, &mut self.generator);
    }
}

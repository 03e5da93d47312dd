use crate::NameGenApp;
use crate::ui;

use egui_lens::ReactiveEventLogger;
use serde::{Serialize, Deserialize};

/// Define the tabs for the DockArea
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Generator,
    Templates,
    Settings,
    EventLog,
}

pub struct TabParams<'a> {
    pub app: &'a mut NameGenApp,
}

/// Tab container struct for DockArea
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tab {
    pub kind: TabKind,
}

impl Tab {
    pub fn new(kind: TabKind) -> Self {
        Self { kind }
    }

    pub fn title(&self) -> String {
        match self.kind {
            TabKind::Generator => "Generator".to_string(),
            TabKind::Templates => "Templates".to_string(),
            TabKind::Settings => "Settings".to_string(),
            TabKind::EventLog => "Event Log".to_string(),
        }
    }

    pub fn content(&self, ui: &mut egui::Ui, params: &mut TabParams<'_>) {
        let logger_state_clone = params.app.logger_state.clone();
        let log_colors_clone = params.app.log_colors.clone();

        match self.kind {
            TabKind::Generator => {
                ui::show_generator_panel(ui, params.app, &logger_state_clone, &log_colors_clone);
            }
            TabKind::Templates => {
                ui::show_templates_panel(ui, params.app, &logger_state_clone, &log_colors_clone);
            }
            TabKind::Settings => {
                ui::show_settings_panel(ui, params.app, &logger_state_clone, &log_colors_clone);
            }
            TabKind::EventLog => {
                let logger = ReactiveEventLogger::with_colors(&logger_state_clone, &log_colors_clone);
                logger.show(ui);
            }
        }
    }
}

pub struct TabViewer<'a> {
    pub app: &'a mut NameGenApp,
}

impl<'a> egui_dock::TabViewer for TabViewer<'a> {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        let mut params = TabParams {
            app: self.app,
        };
        tab.content(ui, &mut params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_titles() {
        assert_eq!(Tab::new(TabKind::Generator).title(), "Generator");
        assert_eq!(Tab::new(TabKind::EventLog).title(), "Event Log");
    }

    #[test]
    fn test_tab_serializes_kind() {
        let json = serde_json::to_string(&Tab::new(TabKind::Templates)).unwrap();
        let tab: Tab = serde_json::from_str(&json).unwrap();
        assert_eq!(tab.kind, TabKind::Templates);
    }
}

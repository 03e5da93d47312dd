pub mod generator_panel;
pub mod templates_panel;
pub mod settings_panel;
pub mod tabs;
pub mod selection;

// Re-export the show functions for each panel
pub use generator_panel::{show_generator_panel, GeneratorState};
pub use templates_panel::show_templates_panel;
pub use settings_panel::show_settings_panel;

// Re-export tab-related types
pub use tabs::{Tab, TabKind, TabViewer};

// Re-export selection functions
pub use selection::initialize_and_show_banner;

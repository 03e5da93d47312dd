// Name Generator Core Library
// Re-export all modules for external use

pub mod constants;
pub mod formatter;
pub mod platform;
pub mod settings;
pub mod template;
pub mod ui;
pub mod app;

// Re-export the main types for easy access
pub use app::NameGenApp;
pub use formatter::{format_entries, FormatError, GeneratedEntry, NameRequest};
pub use settings::{AppSettings, SettingsError};
pub use template::{TemplateEntry, TemplateError, TemplateList};

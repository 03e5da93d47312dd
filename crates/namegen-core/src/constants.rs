// Custom log types for different event categories
pub const LOG_TYPE_GENERATE: &str = "generate";
pub const LOG_TYPE_CLIPBOARD: &str = "clipboard";

// Separator between a template's name text and its explanation
pub const EXPLANATION_SEPARATOR: &str = "//";

// Joins the ID, site and template text of a generated name
pub const NAME_JOINER: char = '_';

pub const DEFAULT_TEMPLATE_FILE: &str = "list.txt";

// Config directory and file names under dirs::config_dir()
pub const CONFIG_DIR_NAME: &str = "namegen";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const DOCK_STATE_FILE_NAME: &str = "dock_state.json";

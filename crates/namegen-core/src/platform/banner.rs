use crate::platform::parameters::gui;

#[derive(Default, Debug)]
pub struct Banner {
    pub message: String,
}

impl Banner {
    pub fn new() -> Banner {
        Banner {
            message: String::new(),
        }
    }

    pub fn format(&mut self) {
        self.message = format!("\n**** Welcome to {}, Version {}", gui::APPLICATION_NAME, gui::VERSION);
        self.message += &format!("\n**** Today is {}", chrono::Local::now().format("%m-%d-%Y %H:%M:%S"));
    }

    /// Append the loaded template source to the banner
    pub fn with_templates(&mut self, source: &str, count: usize) {
        self.message += &format!("\n**** Templates : {} ({} entries)\n", source, count);
    }
}

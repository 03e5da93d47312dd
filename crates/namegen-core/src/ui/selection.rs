use crate::platform::banner;
use crate::template::TemplateList;
use egui_lens::ReactiveEventLogger;

/// Initialize and display the application banner along with the loaded templates
pub fn initialize_and_show_banner(
    logger: &ReactiveEventLogger,
    templates: &TemplateList,
) {
    let mut app_banner = banner::Banner::new();
    app_banner.format();

    let source = templates
        .source()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<built-in>".to_string());
    app_banner.with_templates(&source, templates.len());

    logger.log_info(&app_banner.message);
}

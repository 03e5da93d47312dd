use crate::constants::NAME_JOINER;
use crate::template::TemplateEntry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("ID field is required")]
    MissingId,
}

/// A formatted name and the explanation carried over from its template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEntry {
    pub name: String,
    pub explanation: String,
}

impl GeneratedEntry {
    pub fn has_explanation(&self) -> bool {
        !self.explanation.is_empty()
    }
}

/// Generate one name per template, in template order.
///
/// Names are `id_site_text`, or `id_text` when the site is empty after
/// trimming. An empty ID rejects the whole request.
pub fn format_entries(
    templates: &[TemplateEntry],
    id_value: &str,
    letter_value: &str,
) -> Result<Vec<GeneratedEntry>, FormatError> {
    let id_value = id_value.trim();
    let letter_value = letter_value.trim();

    if id_value.is_empty() {
        return Err(FormatError::MissingId);
    }

    let mut prefix = String::from(id_value);
    prefix.push(NAME_JOINER);
    if !letter_value.is_empty() {
        prefix.push_str(letter_value);
        prefix.push(NAME_JOINER);
    }

    Ok(templates
        .iter()
        .map(|template| GeneratedEntry {
            name: format!("{}{}", prefix, template.main_text),
            explanation: template.explanation.clone(),
        })
        .collect())
}

/// The user's ID and site inputs, trimmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRequest {
    pub id: String,
    pub site: String,
}

impl NameRequest {
    pub fn new(id: &str, site: &str) -> Self {
        Self {
            id: id.trim().to_string(),
            site: site.trim().to_string(),
        }
    }

    pub fn apply(&self, templates: &[TemplateEntry]) -> Result<Vec<GeneratedEntry>, FormatError> {
        format_entries(templates, &self.id, &self.site)
    }
}

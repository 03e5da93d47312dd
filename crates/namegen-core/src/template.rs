use std::path::{Path, PathBuf};

use crate::constants::EXPLANATION_SEPARATOR;

/// A single line of the template file.
///
/// `main_text` is appended to the generated name, `explanation` is shown as
/// a tooltip next to it (empty when the line has no `//` separator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub main_text: String,
    pub explanation: String,
}

impl TemplateEntry {
    /// Parse one raw line, splitting once on the first `//`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.split_once(EXPLANATION_SEPARATOR) {
            Some((main_text, explanation)) => Self {
                main_text: main_text.to_string(),
                explanation: explanation.trim().to_string(),
            },
            None => Self {
                main_text: line.to_string(),
                explanation: String::new(),
            },
        }
    }

    pub fn has_explanation(&self) -> bool {
        !self.explanation.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to read template file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered, read-only list of templates loaded from a text file
#[derive(Debug, Clone, Default)]
pub struct TemplateList {
    entries: Vec<TemplateEntry>,
    source: Option<PathBuf>,
}

impl TemplateList {
    /// Parse template text, one entry per line.
    ///
    /// Blank lines inside the text are kept so the output always lines up
    /// with the file; a trailing newline does not add an entry. `\n`,
    /// `\r\n` and a lone `\r` all end a line.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        Self {
            entries: text.lines().map(TemplateEntry::parse).collect(),
            source: None,
        }
    }

    /// Read and parse a UTF-8 template file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut list = Self::parse(&text);
        list.source = Some(path.to_path_buf());
        log::debug!("Loaded {} templates from {}", list.len(), path.display());
        Ok(list)
    }

    /// Re-read the file this list was loaded from.
    ///
    /// The current entries are kept if the read fails. Lists built with
    /// [`TemplateList::parse`] have no source and reload to themselves.
    pub fn reload(&mut self) -> Result<(), TemplateError> {
        if let Some(path) = self.source.clone() {
            *self = Self::load(path)?;
        }
        Ok(())
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "namegen-template-{}-{}.txt",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_with_explanation() {
        let entry = TemplateEntry::parse("foo//bar");
        assert_eq!(entry.main_text, "foo");
        assert_eq!(entry.explanation, "bar");
        assert!(entry.has_explanation());
    }

    #[test]
    fn test_parse_without_explanation() {
        let entry = TemplateEntry::parse("  foo  ");
        assert_eq!(entry.main_text, "foo");
        assert_eq!(entry.explanation, "");
        assert!(!entry.has_explanation());
    }

    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let entry = TemplateEntry::parse("LINK_A // see http://example.com");
        assert_eq!(entry.main_text, "LINK_A ");
        assert_eq!(entry.explanation, "see http://example.com");
    }

    #[test]
    fn test_parse_empty_explanation_after_separator() {
        let entry = TemplateEntry::parse("foo//   ");
        assert_eq!(entry.main_text, "foo");
        assert!(!entry.has_explanation());
    }

    #[test]
    fn test_list_keeps_order_and_blank_lines() {
        let list = TemplateList::parse("first//1\n\nthird\n");
        assert_eq!(list.len(), 3);
        assert_eq!(list.entries()[0].main_text, "first");
        assert_eq!(list.entries()[1].main_text, "");
        assert_eq!(list.entries()[2].main_text, "third");
        assert!(list.source().is_none());
    }

    #[test]
    fn test_list_handles_crlf_and_bom() {
        let list = TemplateList::parse("\u{feff}a//x\r\nb\r\n");
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0].main_text, "a");
        assert_eq!(list.entries()[0].explanation, "x");
        assert_eq!(list.entries()[1].main_text, "b");
    }

    #[test]
    fn test_main_text_keeps_space_before_separator() {
        let entry = TemplateEntry::parse("  FIREWALL  // Edge firewall ");
        assert_eq!(entry.main_text, "FIREWALL  ");
        assert_eq!(entry.explanation, "Edge firewall");
    }

    #[test]
    fn test_list_splits_on_lone_carriage_return() {
        let list = TemplateList::parse("a//x\rb\r\rc\r\nd\r");
        let names: Vec<&str> = list.entries().iter().map(|e| e.main_text.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "", "c", "d"]);
        assert_eq!(list.entries()[0].explanation, "x");
    }

    #[test]
    fn test_empty_text_is_empty_list() {
        assert!(TemplateList::parse("").is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("namegen-template-does-not-exist.txt");
        match TemplateList::load(&path) {
            Err(TemplateError::Read { path: failed, .. }) => assert_eq!(failed, path),
            Ok(_) => panic!("expected read error"),
        }
    }

    #[test]
    fn test_load_and_reload() {
        let path = temp_file("reload", "one\ntwo//2\n");
        let mut list = TemplateList::load(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.source(), Some(path.as_path()));

        std::fs::write(&path, "one\ntwo\nthree\n").unwrap();
        list.reload().unwrap();
        assert_eq!(list.len(), 3);

        std::fs::remove_file(&path).unwrap();
        assert!(list.reload().is_err());
        assert_eq!(list.len(), 3);
    }
}

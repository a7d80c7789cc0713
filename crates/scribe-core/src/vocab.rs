//! Session vocabulary list with CSV export.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("both term and definition must be filled")]
    EmptyField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub term: String,
    pub definition: String,
}

/// Ordered (term, definition) pairs, appended during a session. Duplicates
/// are permitted; entries only disappear when a lesson import replaces the
/// whole list.
#[derive(Debug, Default)]
pub struct VocabularyStore {
    entries: Vec<VocabEntry>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Rejects empty term or definition, leaving the store
    /// unchanged; the caller surfaces the error as a warning.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<(), VocabError> {
        if term.is_empty() || definition.is_empty() {
            return Err(VocabError::EmptyField);
        }
        self.entries.push(VocabEntry {
            term: term.to_string(),
            definition: definition.to_string(),
        });
        Ok(())
    }

    pub fn list(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole list (lesson import, overwrite semantics).
    pub fn replace_all(&mut self, entries: Vec<VocabEntry>) {
        self.entries = entries;
    }

    /// Serialize as UTF-8 CSV: header `Term,Definition`, CRLF terminators,
    /// RFC 4180 quoting. CRLF is used on every platform, matching the
    /// original export.
    pub fn export_csv(&self) -> Vec<u8> {
        let mut out = String::from("Term,Definition\r\n");
        for e in &self.entries {
            out.push_str(&csv_field(&e.term));
            out.push(',');
            out.push_str(&csv_field(&e.definition));
            out.push_str("\r\n");
        }
        out.into_bytes()
    }
}

/// Quote a field only when it contains a comma, quote, or line break.
fn csv_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

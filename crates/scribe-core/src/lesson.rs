//! Lesson bundle export/import.
//!
//! A lesson is the current input text plus the vocabulary list, exchanged as
//! pretty-printed JSON: `{"text": ..., "vocab": [[term, definition], ...]}`.
//! Import is all-or-nothing; the caller only replaces session state after a
//! successful parse.

use serde::{Deserialize, Serialize};

use crate::vocab::VocabEntry;

#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    #[error("lesson document parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonBundle {
    pub text: String,
    /// `[term, definition]` pairs; serde maps the tuple to a 2-element JSON
    /// array, keeping the wire format stable.
    pub vocab: Vec<(String, String)>,
}

impl LessonBundle {
    pub fn new(text: String, entries: &[VocabEntry]) -> Self {
        Self {
            text,
            vocab: entries
                .iter()
                .map(|e| (e.term.clone(), e.definition.clone()))
                .collect(),
        }
    }

    pub fn vocab_entries(&self) -> Vec<VocabEntry> {
        self.vocab
            .iter()
            .map(|(term, definition)| VocabEntry {
                term: term.clone(),
                definition: definition.clone(),
            })
            .collect()
    }

    /// Human-readable (indented) JSON, round-trips exactly through
    /// [`LessonBundle::from_json`].
    pub fn to_json(&self) -> String {
        // Serialization of String/Vec<(String, String)> cannot fail.
        serde_json::to_string_pretty(self).expect("lesson bundle serialization")
    }

    pub fn from_json(doc: &str) -> Result<Self, LessonError> {
        serde_json::from_str(doc).map_err(|e| LessonError::Parse(e.to_string()))
    }
}

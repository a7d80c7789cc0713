//! Stateful annotation session.
//!
//! `Session` owns the per-user state (input text, vocabulary list, video
//! URL) and re-evaluates the annotation pipeline whenever the input changes.
//! The correction table and dictionary are immutable after load and shared
//! read-only across sessions; per-session state is never shared.

mod render;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use scribe_core::annotate::annotate_text;
use scribe_core::corrections::CorrectionTable;
use scribe_core::jyutping::JyutpingDict;
use scribe_core::lesson::{LessonBundle, LessonError};
use scribe_core::links::{self, DictLink};
use scribe_core::unicode::{separate, Separated};
use scribe_core::vocab::{VocabEntry, VocabularyStore};

pub use render::{RenderedDocument, RenderedLine};

/// Outcome of a vocabulary add. Rejection is a non-fatal warning; the
/// frontend keeps the typed inputs so the user can fix them.
#[derive(Debug, PartialEq, Eq)]
pub enum AddVocabOutcome {
    Added,
    Rejected { warning: String },
}

pub struct Session {
    corrections: Arc<CorrectionTable>,
    dict: Arc<JyutpingDict>,

    text: String,
    rendered: RenderedDocument,
    vocabulary: VocabularyStore,
    video_url: Option<String>,
}

impl Session {
    pub fn new(corrections: Arc<CorrectionTable>, dict: Arc<JyutpingDict>) -> Self {
        Self {
            corrections,
            dict,
            text: String::new(),
            rendered: RenderedDocument {
                // Empty input still has one (blank) line.
                lines: vec![RenderedLine::Tokens(vec![])],
            },
            vocabulary: VocabularyStore::new(),
            video_url: None,
        }
    }

    /// Input-changed handler: store the new text and synchronously
    /// re-evaluate the full pipeline. Per-line failures become error rows.
    pub fn set_input(&mut self, text: &str) -> &RenderedDocument {
        self.text = text.to_string();
        self.reevaluate();
        &self.rendered
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rendered(&self) -> &RenderedDocument {
        &self.rendered
    }

    fn reevaluate(&mut self) {
        let lines = annotate_text(&self.text, self.dict.as_ref(), &self.corrections);
        tracing::debug!(lines = lines.len(), "pipeline re-evaluated");
        self.rendered = RenderedDocument {
            lines: lines.into_iter().map(RenderedLine::from).collect(),
        };
    }

    // --- Vocabulary ---

    pub fn add_vocab(&mut self, term: &str, definition: &str) -> AddVocabOutcome {
        match self.vocabulary.add(term, definition) {
            Ok(()) => AddVocabOutcome::Added,
            Err(e) => AddVocabOutcome::Rejected {
                warning: e.to_string(),
            },
        }
    }

    pub fn vocabulary(&self) -> &[VocabEntry] {
        self.vocabulary.list()
    }

    pub fn export_vocab_csv(&self) -> Vec<u8> {
        self.vocabulary.export_csv()
    }

    // --- Lesson bundle ---

    pub fn export_lesson(&self) -> String {
        LessonBundle::new(self.text.clone(), self.vocabulary.list()).to_json()
    }

    /// Atomic import: parse first, and only replace the session text and
    /// vocabulary once parsing succeeded. On error the prior state is
    /// untouched.
    pub fn import_lesson(&mut self, doc: &str) -> Result<(), LessonError> {
        let bundle = LessonBundle::from_json(doc)?;
        self.vocabulary.replace_all(bundle.vocab_entries());
        self.text = bundle.text;
        self.reevaluate();
        Ok(())
    }

    // --- Side features ---

    /// Separator over the current input text; independent of the
    /// annotation pipeline.
    pub fn separate(&self) -> Separated {
        separate(&self.text)
    }

    pub fn lookup_links(&self, run: &str) -> Vec<DictLink> {
        links::lookup_links(run)
    }

    pub fn set_video_url(&mut self, url: &str) {
        self.video_url = links::embed_url(url).map(str::to_string);
    }

    pub fn embed_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }
}

//! Character-to-Jyutping conversion seam.
//!
//! The annotation engine only sees the [`Romanizer`] trait; the shipped
//! provider is [`JyutpingDict`], a longest-match dictionary romanizer.

mod dict;

pub use dict::{DictError, JyutpingDict};

/// One contiguous piece of a romanized line.
///
/// `jyutping` is `None` for runs the romanizer cannot annotate: punctuation,
/// whitespace, Latin text, and characters missing from its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub run: String,
    pub jyutping: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomanizeError {
    #[error("romanizer backend failure: {0}")]
    Backend(String),
}

/// A character-to-romanization conversion service.
///
/// Contract: the returned segments cover `line` contiguously, in order, with
/// no gaps and no overlaps — concatenating `run` fields reproduces `line`
/// exactly. An empty line yields an empty segment sequence.
pub trait Romanizer {
    fn romanize_line(&self, line: &str) -> Result<Vec<Segment>, RomanizeError>;
}

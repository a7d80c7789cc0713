//! Core annotation engine for Cantonese text.
//!
//! Pure, UI-independent pieces: the Jyutping romanizer seam, the correction
//! table, the annotation pipeline, and the vocabulary/lesson codecs. Session
//! state lives in `scribe-session`; this crate has no mutable globals.

pub mod annotate;
pub mod corrections;
pub mod jyutping;
pub mod lesson;
pub mod lines;
pub mod links;
pub mod unicode;
pub mod vocab;

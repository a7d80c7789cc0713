//! Rendering contract between the session and a frontend.

use scribe_core::annotate::{AnnotationToken, LineAnnotation};

/// One row of the annotated view.
///
/// `Tokens(vec![])` is a blank input line, rendered as a visible empty row.
/// `Failed` carries a per-line error message; other rows still render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedLine {
    Tokens(Vec<AnnotationToken>),
    Failed(String),
}

impl From<LineAnnotation> for RenderedLine {
    fn from(line: LineAnnotation) -> Self {
        match line {
            LineAnnotation::Tokens(tokens) => RenderedLine::Tokens(tokens),
            LineAnnotation::Failed(msg) => RenderedLine::Failed(msg),
        }
    }
}

/// The full annotated view of the current input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    pub lines: Vec<RenderedLine>,
}

impl RenderedDocument {
    /// Reassemble the original input text from the rendered rows.
    ///
    /// Only possible when no row failed; failed rows lose their source text.
    pub fn source_text(&self) -> Option<String> {
        let mut lines = Vec::with_capacity(self.lines.len());
        for row in &self.lines {
            match row {
                RenderedLine::Tokens(tokens) => {
                    lines.push(tokens.iter().map(AnnotationToken::text).collect::<String>());
                }
                RenderedLine::Failed(_) => return None,
            }
        }
        Some(lines.join("\n"))
    }
}

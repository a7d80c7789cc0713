//! The annotation pipeline: romanizer segments + correction overlay →
//! annotation tokens.

use crate::corrections::CorrectionTable;
use crate::jyutping::{RomanizeError, Romanizer};
use crate::lines::split_lines;

/// Opaque style hint carried on annotated pairs for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight(pub &'static str);

/// Background color the original UI used for annotated pairs.
pub const DEFAULT_HIGHLIGHT: Highlight = Highlight("#FFFCFF");

/// One rendered unit of an annotated line.
///
/// Invariant: concatenating the text content (`Plain` content or `Annotated`
/// run) of a token sequence, in order, reconstructs the input line exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationToken {
    /// Text with no romanization: punctuation, whitespace, Latin runs, or
    /// characters the romanizer could not annotate.
    Plain(String),
    Annotated {
        run: String,
        jyutping: String,
        highlight: Highlight,
    },
}

impl AnnotationToken {
    /// The original-text content of this token.
    pub fn text(&self) -> &str {
        match self {
            AnnotationToken::Plain(content) => content,
            AnnotationToken::Annotated { run, .. } => run,
        }
    }
}

/// Annotate one line. Pure function of the line, the romanizer output, and
/// the correction table.
///
/// Correction lookup is by exact run equality; a run the table does not
/// mention keeps the romanizer's own reading (the common path). Partial
/// overlaps are not corrected: a table key "茶" never rewrites a run "飲茶".
pub fn annotate(
    line: &str,
    romanizer: &dyn Romanizer,
    corrections: &CorrectionTable,
) -> Result<Vec<AnnotationToken>, RomanizeError> {
    let segments = romanizer.romanize_line(line)?;
    let mut tokens = Vec::with_capacity(segments.len());
    for seg in segments {
        match seg.jyutping {
            None => tokens.push(AnnotationToken::Plain(seg.run)),
            Some(jp) => {
                let jyutping = match corrections.get(&seg.run) {
                    Some(fixed) => fixed.to_string(),
                    None => jp,
                };
                tokens.push(AnnotationToken::Annotated {
                    run: seg.run,
                    jyutping,
                    highlight: DEFAULT_HIGHLIGHT,
                });
            }
        }
    }
    Ok(tokens)
}

/// Annotation result for one line of a multi-line input.
///
/// A romanizer failure is captured per line so one bad line does not abort
/// the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAnnotation {
    Tokens(Vec<AnnotationToken>),
    Failed(String),
}

/// Split multi-line input and annotate each line independently.
///
/// Blank lines produce an empty `Tokens` row, preserved for vertical spacing
/// in rendering.
pub fn annotate_text(
    input: &str,
    romanizer: &dyn Romanizer,
    corrections: &CorrectionTable,
) -> Vec<LineAnnotation> {
    split_lines(input)
        .into_iter()
        .map(|line| match annotate(line, romanizer, corrections) {
            Ok(tokens) => LineAnnotation::Tokens(tokens),
            Err(e) => {
                tracing::debug!(error = %e, "line annotation failed");
                LineAnnotation::Failed(e.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jyutping::{JyutpingDict, Segment};

    fn table(toml: &str) -> CorrectionTable {
        CorrectionTable::from_toml_str(toml).unwrap()
    }

    fn empty_table() -> CorrectionTable {
        table("[corrections]\n")
    }

    fn reassemble(tokens: &[AnnotationToken]) -> String {
        tokens.iter().map(AnnotationToken::text).collect()
    }

    #[test]
    fn annotates_known_runs() {
        let dict = JyutpingDict::embedded();
        let tokens = annotate("你好", &dict, &empty_table()).unwrap();
        assert_eq!(
            tokens,
            vec![AnnotationToken::Annotated {
                run: "你好".to_string(),
                jyutping: "nei5 hou2".to_string(),
                highlight: DEFAULT_HIGHLIGHT,
            }]
        );
    }

    #[test]
    fn punctuation_stays_plain() {
        let dict = JyutpingDict::embedded();
        let tokens = annotate("你好！", &dict, &empty_table()).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], AnnotationToken::Plain("！".to_string()));
    }

    #[test]
    fn correction_overrides_dictionary_reading() {
        let dict = JyutpingDict::embedded();
        let t = table("[corrections]\n\"你好\" = \"nei5 hou2/lei5 hou2\"\n");
        let tokens = annotate("你好", &dict, &t).unwrap();
        match &tokens[0] {
            AnnotationToken::Annotated { jyutping, .. } => {
                assert_eq!(jyutping, "nei5 hou2/lei5 hou2");
            }
            other => panic!("expected annotated token, got {other:?}"),
        }
    }

    #[test]
    fn correction_does_not_touch_partial_overlaps() {
        let dict = JyutpingDict::embedded();
        // Table fixes the single character; the dictionary segments the
        // two-character word, so the fix never applies.
        let t = table("[corrections]\n\"茶\" = \"caa4-fixed\"\n");
        let tokens = annotate("飲茶", &dict, &t).unwrap();
        match &tokens[0] {
            AnnotationToken::Annotated { run, jyutping, .. } => {
                assert_eq!(run, "飲茶");
                assert_eq!(jyutping, "jam2 caa4");
            }
            other => panic!("expected annotated token, got {other:?}"),
        }
    }

    #[test]
    fn correction_never_annotates_plain_runs() {
        let dict = JyutpingDict::embedded();
        // A table entry for a run the romanizer returned unannotated must
        // not promote it to an annotated pair.
        let t = table("[corrections]\n\"abc\" = \"x\"\n");
        let tokens = annotate("abc", &dict, &t).unwrap();
        assert_eq!(tokens, vec![AnnotationToken::Plain("abc".to_string())]);
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        let dict = JyutpingDict::embedded();
        assert!(annotate("", &dict, &empty_table()).unwrap().is_empty());
    }

    #[test]
    fn pass_through_reconstruction() {
        let dict = JyutpingDict::embedded();
        let t = table("[corrections]\n\"你好\" = \"lei5 hou2\"\n");
        for line in [
            "你好，世界！",
            "abc 你好 def",
            "今日天氣好好 gam1 jat6",
            "   ",
            "。，！？",
        ] {
            let tokens = annotate(line, &dict, &t).unwrap();
            assert_eq!(reassemble(&tokens), line, "pass-through broken for {line:?}");
        }
    }

    #[test]
    fn annotate_text_keeps_blank_rows() {
        let dict = JyutpingDict::embedded();
        let lines = annotate_text("你好\n\n飲茶", &dict, &empty_table());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], LineAnnotation::Tokens(vec![]));
    }

    #[test]
    fn one_failing_line_does_not_abort_the_rest() {
        struct FailingRomanizer;
        impl Romanizer for FailingRomanizer {
            fn romanize_line(&self, line: &str) -> Result<Vec<Segment>, RomanizeError> {
                if line.contains("你好") {
                    Err(RomanizeError::Backend("boom".to_string()))
                } else {
                    Ok(vec![Segment {
                        run: line.to_string(),
                        jyutping: None,
                    }])
                }
            }
        }
        let lines = annotate_text("飲茶\n你好\n食飯", &FailingRomanizer, &empty_table());
        assert!(matches!(lines[0], LineAnnotation::Tokens(_)));
        assert!(matches!(lines[1], LineAnnotation::Failed(_)));
        assert!(matches!(lines[2], LineAnnotation::Tokens(_)));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn mixed_line() -> impl Strategy<Value = String> {
            let piece = prop_oneof![
                Just("你好".to_string()),
                Just("飲茶".to_string()),
                Just("龜".to_string()),
                Just("hello".to_string()),
                Just(" ".to_string()),
                Just("！".to_string()),
                Just("123".to_string()),
            ];
            proptest::collection::vec(piece, 0..12).prop_map(|v| v.concat())
        }

        proptest! {
            #[test]
            fn concatenated_tokens_reproduce_the_line(line in mixed_line()) {
                let dict = JyutpingDict::embedded();
                let t = table("[corrections]\n\"你好\" = \"lei5 hou2\"\n");
                let tokens = annotate(&line, &dict, &t).unwrap();
                prop_assert_eq!(reassemble(&tokens), line);
            }
        }
    }
}

//! Dictionary-backed Jyutping romanizer.
//!
//! Word → jyutping map with greedy longest-match segmentation over CJK runs.
//! Data is TSV (`word<TAB>jyutping`, `#` comments); a starter table is
//! embedded so the romanizer works without an external file.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::unicode::is_cjk;

use super::{RomanizeError, Romanizer, Segment};

const DEFAULT_DICT_TSV: &str = include_str!("default_dict.tsv");

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("cannot read dictionary: {0}")]
    Io(#[from] io::Error),

    #[error("dictionary line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

#[derive(Debug)]
pub struct JyutpingDict {
    entries: HashMap<String, String>,
    /// Longest key length in chars, bounds the match probe.
    max_key_chars: usize,
}

impl JyutpingDict {
    /// Build from the embedded starter table. The embedded data is compiled
    /// in and must be valid; a failure here is a build defect.
    pub fn embedded() -> Self {
        Self::from_tsv_str(DEFAULT_DICT_TSV)
            .unwrap_or_else(|e| panic!("embedded dictionary is malformed: {e}"))
    }

    pub fn load(path: &Path) -> Result<Self, DictError> {
        let content = fs::read_to_string(path)?;
        let dict = Self::from_tsv_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            entries = dict.len(),
            "loaded jyutping dictionary"
        );
        Ok(dict)
    }

    pub fn from_tsv_str(content: &str) -> Result<Self, DictError> {
        let mut entries = HashMap::new();
        let mut max_key_chars = 0;
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, jyutping) = line.split_once('\t').ok_or_else(|| DictError::Parse {
                line: idx + 1,
                reason: "expected word<TAB>jyutping".to_string(),
            })?;
            if word.is_empty() || jyutping.is_empty() {
                return Err(DictError::Parse {
                    line: idx + 1,
                    reason: "word and jyutping must be non-empty".to_string(),
                });
            }
            if !word.chars().all(is_cjk) {
                return Err(DictError::Parse {
                    line: idx + 1,
                    reason: format!("word {word:?} contains non-CJK characters"),
                });
            }
            max_key_chars = max_key_chars.max(word.chars().count());
            entries.insert(word.to_string(), jyutping.to_string());
        }
        Ok(Self {
            entries,
            max_key_chars,
        })
    }

    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest dictionary key starting at `chars[start]`, if any.
    fn longest_match(&self, chars: &[char], start: usize) -> Option<(usize, &str)> {
        let limit = self.max_key_chars.min(chars.len() - start);
        for len in (1..=limit).rev() {
            let candidate: String = chars[start..start + len].iter().collect();
            if let Some(jp) = self.entries.get(&candidate) {
                return Some((len, jp.as_str()));
            }
        }
        None
    }
}

impl Romanizer for JyutpingDict {
    /// Greedy left-to-right segmentation. CJK runs are matched against the
    /// dictionary, longest key first; an unmatched ideograph becomes its own
    /// unannotated segment. Maximal non-CJK runs pass through unannotated.
    fn romanize_line(&self, line: &str) -> Result<Vec<Segment>, RomanizeError> {
        let chars: Vec<char> = line.chars().collect();
        let mut segments = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if is_cjk(chars[i]) {
                if let Some((len, jp)) = self.longest_match(&chars, i) {
                    segments.push(Segment {
                        run: chars[i..i + len].iter().collect(),
                        jyutping: Some(jp.to_string()),
                    });
                    i += len;
                } else {
                    segments.push(Segment {
                        run: chars[i].to_string(),
                        jyutping: None,
                    });
                    i += 1;
                }
            } else {
                let mut j = i + 1;
                while j < chars.len() && !is_cjk(chars[j]) {
                    j += 1;
                }
                segments.push(Segment {
                    run: chars[i..j].iter().collect(),
                    jyutping: None,
                });
                i = j;
            }
        }

        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.run.as_str()).collect()
    }

    #[test]
    fn embedded_dict_loads() {
        let dict = JyutpingDict::embedded();
        assert!(dict.len() > 50);
        assert_eq!(dict.lookup("你好"), Some("nei5 hou2"));
        assert_eq!(dict.lookup("飲茶"), Some("jam2 caa4"));
    }

    #[test]
    fn longest_match_wins() {
        let dict = JyutpingDict::embedded();
        let segs = dict.romanize_line("飲茶").unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].run, "飲茶");
        assert_eq!(segs[0].jyutping.as_deref(), Some("jam2 caa4"));
    }

    #[test]
    fn falls_back_to_single_characters() {
        let dict = JyutpingDict::from_tsv_str("飲\tjam2\n茶\tcaa4\n").unwrap();
        let segs = dict.romanize_line("飲茶").unwrap();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].jyutping.as_deref(), Some("jam2"));
        assert_eq!(segs[1].jyutping.as_deref(), Some("caa4"));
    }

    #[test]
    fn unknown_cjk_is_unannotated_per_char() {
        let dict = JyutpingDict::from_tsv_str("好\thou2\n").unwrap();
        let segs = dict.romanize_line("好龜龜").unwrap();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].jyutping.as_deref(), Some("hou2"));
        assert_eq!(segs[1].jyutping, None);
        assert_eq!(segs[2].jyutping, None);
    }

    #[test]
    fn non_cjk_runs_pass_through() {
        let dict = JyutpingDict::embedded();
        let segs = dict.romanize_line("你好, world!").unwrap();
        assert_eq!(joined(&segs), "你好, world!");
        let plain: Vec<&Segment> = segs.iter().filter(|s| s.jyutping.is_none()).collect();
        assert_eq!(plain.len(), 1);
        assert_eq!(plain[0].run, ", world!");
    }

    #[test]
    fn empty_line_yields_no_segments() {
        let dict = JyutpingDict::embedded();
        assert!(dict.romanize_line("").unwrap().is_empty());
    }

    #[test]
    fn segments_cover_line_contiguously() {
        let dict = JyutpingDict::embedded();
        for line in ["你好嗎？", "abc你好def", "。。。", "今日天氣好好"] {
            let segs = dict.romanize_line(line).unwrap();
            assert_eq!(joined(&segs), line, "coverage broken for {line:?}");
        }
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let dict = JyutpingDict::from_tsv_str("# header\n\n你\tnei5\n").unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn error_missing_tab() {
        let err = JyutpingDict::from_tsv_str("你 nei5\n").unwrap_err();
        assert!(matches!(err, DictError::Parse { line: 1, .. }));
    }

    #[test]
    fn error_non_cjk_word() {
        let err = JyutpingDict::from_tsv_str("abc\tdef\n").unwrap_err();
        assert!(err.to_string().contains("non-CJK"));
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "飲茶\tjam2 caa4").unwrap();
        let dict = JyutpingDict::load(f.path()).unwrap();
        assert_eq!(dict.lookup("飲茶"), Some("jam2 caa4"));
    }

    #[test]
    fn load_missing_file_fails() {
        let err = JyutpingDict::load(Path::new("/nonexistent/dict.tsv")).unwrap_err();
        assert!(matches!(err, DictError::Io(_)));
    }
}

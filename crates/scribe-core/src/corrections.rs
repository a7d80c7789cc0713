//! Curated romanization overrides, loaded from TOML.
//!
//! The conversion dictionary gets some character runs wrong; maintainers fix
//! them here rather than in the dictionary data. The table is loaded once at
//! startup and is read-only afterwards, so it can be shared across sessions
//! behind an `Arc`. A missing or malformed file is a startup failure — there
//! is deliberately no empty-table fallback.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum CorrectionsError {
    #[error("cannot read correction table: {0}")]
    Io(#[from] io::Error),

    #[error("correction table TOML parse error: {0}")]
    Parse(String),

    #[error("correction table entry {key:?} is invalid: {reason}")]
    InvalidEntry { key: String, reason: String },
}

/// `[corrections]` table of `"characters" = "jyutping"` pairs. The value may
/// encode alternative readings, e.g. `"gaa1/gaa3"`; it is stored verbatim.
#[derive(Debug, Deserialize)]
struct CorrectionsDoc {
    corrections: HashMap<String, String>,
}

/// Exact-match overrides keyed by character run.
///
/// Keys are matched against the run the romanizer produced, by exact,
/// case-sensitive, untrimmed string equality. Partial overlaps are not
/// corrected: a key "茶" does not touch a run "飲茶".
#[derive(Debug)]
pub struct CorrectionTable {
    entries: HashMap<String, String>,
}

impl CorrectionTable {
    pub fn load(path: &Path) -> Result<Self, CorrectionsError> {
        let content = fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            entries = table.len(),
            "loaded correction table"
        );
        Ok(table)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CorrectionsError> {
        let doc: CorrectionsDoc =
            toml::from_str(content).map_err(|e| CorrectionsError::Parse(e.to_string()))?;
        for (key, value) in &doc.corrections {
            if key.is_empty() {
                return Err(CorrectionsError::InvalidEntry {
                    key: key.clone(),
                    reason: "key must not be empty".to_string(),
                });
            }
            if value.is_empty() {
                return Err(CorrectionsError::InvalidEntry {
                    key: key.clone(),
                    reason: "replacement must not be empty".to_string(),
                });
            }
        }
        Ok(Self {
            entries: doc.corrections,
        })
    }

    /// Absence is the common path, not an error.
    pub fn get(&self, run: &str) -> Option<&str> {
        self.entries.get(run).map(String::as_str)
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
    use std::io::Write;

    #[test]
    fn parse_table() {
        let t = CorrectionTable::from_toml_str(
            r#"
[corrections]
"一" = "jat1"
"廿" = "jaa6/je6"
"#,
        )
        .unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("一"), Some("jat1"));
        assert_eq!(t.get("廿"), Some("jaa6/je6"));
        assert_eq!(t.get("二"), None);
    }

    #[test]
    fn lookup_is_exact_not_substring() {
        let t = CorrectionTable::from_toml_str("[corrections]\n\"茶\" = \"caa4\"\n").unwrap();
        assert_eq!(t.get("茶"), Some("caa4"));
        assert_eq!(t.get("飲茶"), None);
    }

    #[test]
    fn lookup_is_untrimmed() {
        let t = CorrectionTable::from_toml_str("[corrections]\n\"茶\" = \"caa4\"\n").unwrap();
        assert_eq!(t.get(" 茶"), None);
        assert_eq!(t.get("茶 "), None);
    }

    #[test]
    fn error_missing_corrections_section() {
        let err = CorrectionTable::from_toml_str("[other]\nx = \"y\"\n").unwrap_err();
        assert!(matches!(err, CorrectionsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = CorrectionTable::from_toml_str("not toml {{{").unwrap_err();
        assert!(matches!(err, CorrectionsError::Parse(_)));
    }

    #[test]
    fn error_empty_key() {
        let err = CorrectionTable::from_toml_str("[corrections]\n\"\" = \"x\"\n").unwrap_err();
        assert!(matches!(err, CorrectionsError::InvalidEntry { .. }));
    }

    #[test]
    fn error_empty_value() {
        let err = CorrectionTable::from_toml_str("[corrections]\n\"茶\" = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("replacement"));
    }

    #[test]
    fn load_missing_file_is_visible_failure() {
        let err = CorrectionTable::load(Path::new("/nonexistent/corrections.toml")).unwrap_err();
        assert!(matches!(err, CorrectionsError::Io(_)));
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[corrections]\n\"飲茶\" = \"jam2 caa4\"").unwrap();
        let t = CorrectionTable::load(f.path()).unwrap();
        assert_eq!(t.get("飲茶"), Some("jam2 caa4"));
    }
}

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use scribe_core::annotate::AnnotationToken;
use scribe_core::corrections::CorrectionTable;
use scribe_core::jyutping::JyutpingDict;
use scribe_session::{RenderedLine, Session};

use super::die;

/// Build a session with the correction table (required) and either an
/// external dictionary or the embedded one.
pub(super) fn make_session(corrections_path: &Path, dict_path: Option<&Path>) -> Session {
    let corrections = die!(
        CorrectionTable::load(corrections_path),
        "Error loading correction table: {}"
    );
    let dict = match dict_path {
        Some(p) => die!(JyutpingDict::load(p), "Error loading dictionary: {}"),
        None => JyutpingDict::embedded(),
    };
    Session::new(Arc::new(corrections), Arc::new(dict))
}

pub(super) fn read_input(text: Option<String>, file: Option<&Path>) -> String {
    match (text, file) {
        (Some(t), None) => t,
        (None, Some(p)) => die!(fs::read_to_string(p), "Error reading input file: {}"),
        _ => {
            eprintln!("Provide either a text argument or --file, not both");
            std::process::exit(1);
        }
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    text: &'a str,
    jyutping: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum LineRecord<'a> {
    Tokens { tokens: Vec<TokenRecord<'a>> },
    Failed { error: &'a str },
}

pub fn annotate(
    corrections_path: &Path,
    dict_path: Option<&Path>,
    text: Option<String>,
    file: Option<&Path>,
    json: bool,
) {
    let mut session = make_session(corrections_path, dict_path);
    let input = read_input(text, file);
    let doc = session.set_input(&input);

    if json {
        let records: Vec<LineRecord> = doc
            .lines
            .iter()
            .map(|line| match line {
                RenderedLine::Tokens(tokens) => LineRecord::Tokens {
                    tokens: tokens
                        .iter()
                        .map(|t| match t {
                            AnnotationToken::Plain(content) => TokenRecord {
                                text: content,
                                jyutping: None,
                            },
                            AnnotationToken::Annotated { run, jyutping, .. } => TokenRecord {
                                text: run,
                                jyutping: Some(jyutping),
                            },
                        })
                        .collect(),
                },
                RenderedLine::Failed(msg) => LineRecord::Failed { error: msg },
            })
            .collect();
        let out = die!(
            serde_json::to_string_pretty(&records),
            "Error serializing output: {}"
        );
        println!("{out}");
    } else {
        for line in &doc.lines {
            match line {
                RenderedLine::Tokens(tokens) => {
                    let rendered: String = tokens
                        .iter()
                        .map(|t| match t {
                            AnnotationToken::Plain(content) => content.clone(),
                            AnnotationToken::Annotated { run, jyutping, .. } => {
                                format!("{run}[{jyutping}]")
                            }
                        })
                        .collect();
                    println!("{rendered}");
                }
                RenderedLine::Failed(msg) => println!("!! {msg}"),
            }
        }
    }
}

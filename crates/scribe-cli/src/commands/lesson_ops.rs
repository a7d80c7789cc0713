use std::fs;
use std::path::Path;

use scribe_core::lesson::LessonBundle;

use super::die;

/// Bundle a text file and a `term<TAB>definition` vocab file into lesson JSON.
pub fn lesson_export(text_file: &Path, vocab_file: Option<&Path>, output: &Path) {
    let text = die!(fs::read_to_string(text_file), "Error reading text file: {}");
    let mut vocab: Vec<(String, String)> = Vec::new();
    if let Some(path) = vocab_file {
        let content = die!(fs::read_to_string(path), "Error reading vocab file: {}");
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let Some((term, definition)) = line.split_once('\t') else {
                eprintln!("line {}: expected term<TAB>definition", idx + 1);
                std::process::exit(1);
            };
            vocab.push((term.to_string(), definition.to_string()));
        }
    }
    let bundle = LessonBundle { text, vocab };
    die!(fs::write(output, bundle.to_json()), "Error writing lesson: {}");
    println!("Wrote lesson to {}", output.display());
}

/// Unpack a lesson JSON document: print the text, then the vocab as TSV.
pub fn lesson_import(input: &Path) {
    let doc = die!(fs::read_to_string(input), "Error reading lesson file: {}");
    let bundle = die!(LessonBundle::from_json(&doc), "Error parsing lesson: {}");
    println!("{}", bundle.text);
    if !bundle.vocab.is_empty() {
        println!("---");
        for (term, definition) in &bundle.vocab {
            println!("{term}\t{definition}");
        }
    }
}

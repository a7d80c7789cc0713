use std::fs;
use std::path::Path;

use scribe_core::vocab::VocabularyStore;

use super::die;

/// Read `term<TAB>definition` lines and write the CSV export.
pub fn vocab_export(input: &Path, output: &Path) {
    let content = die!(fs::read_to_string(input), "Error reading vocab file: {}");
    let mut store = VocabularyStore::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let Some((term, definition)) = line.split_once('\t') else {
            eprintln!("line {}: expected term<TAB>definition", idx + 1);
            std::process::exit(1);
        };
        if let Err(e) = store.add(term, definition) {
            eprintln!("line {}: {e}", idx + 1);
            std::process::exit(1);
        }
    }
    if store.is_empty() {
        eprintln!("Warning: no vocabulary to export");
    }
    die!(fs::write(output, store.export_csv()), "Error writing CSV: {}");
    println!("Wrote {} entries to {}", store.len(), output.display());
}

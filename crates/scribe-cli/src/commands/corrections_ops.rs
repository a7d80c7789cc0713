use std::path::Path;

use scribe_core::corrections::CorrectionTable;

use super::die;

/// Load the table and report, making startup config failures visible.
pub fn corrections_check(path: &Path) {
    let table = die!(
        CorrectionTable::load(path),
        "Error loading correction table: {}"
    );
    println!("{}: {} entries", path.display(), table.len());
}

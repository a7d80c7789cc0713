//! Multi-line input splitting.

/// Split input on `\n`, preserving empty lines as empty strings.
///
/// Each element is annotated independently; a blank line yields an empty
/// token sequence and renders as an empty row. Policy fixed here and relied
/// on by the session layer: `split_lines("")` is `[""]`, one empty element,
/// matching `str::split` semantics.
pub fn split_lines(input: &str) -> Vec<&str> {
    input.split('\n').collect()
}

//! Character-level Unicode classification for Cantonese text.

/// Check the CJK Unified Ideographs block (U+4E00..U+9FFF) plus Extension A
/// (U+3400..U+4DBF). Extension B and beyond never appear in the dictionary
/// data or typical input, so the two common blocks are enough.
pub fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c) || ('\u{3400}'..='\u{4DBF}').contains(&c)
}

/// Romanization tokens are plain ASCII letters with an optional tone digit,
/// e.g. "nei5"; both classes count.
pub fn is_romanization_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Result of [`separate`]: the pure character text and the pure
/// romanization text pulled out of mixed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separated {
    pub characters: String,
    pub romanization: String,
}

/// Split mixed text into its Chinese-character subsequence and its
/// romanization-token subsequence.
///
/// `characters` keeps every CJK ideograph in original order; everything else
/// is dropped. `romanization` space-joins every maximal ASCII-alphanumeric
/// run in order of appearance. This is a best-effort extraction over raw
/// text the user typed (possibly with inline romanization already present)
/// and is independent of the annotation pipeline's segmentation.
pub fn separate(input: &str) -> Separated {
    let mut characters = String::new();
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if is_cjk(c) {
            characters.push(c);
        }
        if is_romanization_char(c) {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    Separated {
        characters,
        romanization: tokens.join(" "),
    }
}

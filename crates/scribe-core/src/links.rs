//! Dictionary lookup link generation.
//!
//! Constant URL templates with one percent-encoded parameter each. Pure
//! pass-through: no validation that the target site knows the word.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Encode everything outside the RFC 3986 unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A lookup link for one reference site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictLink {
    pub site: &'static str,
    pub url: String,
}

/// Build lookup URLs for a character run against the reference sites.
pub fn lookup_links(run: &str) -> Vec<DictLink> {
    let q = percent_encode(run);
    vec![
        DictLink {
            site: "words.hk",
            url: format!("https://words.hk/zidin/{q}"),
        },
        DictLink {
            site: "Wiktionary",
            url: format!("https://en.wiktionary.org/wiki/{q}"),
        },
        DictLink {
            site: "CantoDict",
            url: format!(
                "http://www.cantonese.sheik.co.uk/dictionary/search/?searchtype=1&text={q}"
            ),
        },
    ]
}

fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Pass an embed URL through unchanged; only presence is checked.
pub fn embed_url(url: &str) -> Option<&str> {
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}

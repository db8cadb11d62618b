// src/utils/text.rs
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Failed to compile WHITESPACE_RE")
});

/// Collapses whitespace runs (non-breaking spaces included) to a single space and trims.
pub fn normalize(text: &str) -> String {
    let spaced = text.replace('\u{a0}', " ");
    WHITESPACE_RE.replace_all(&spaced, " ").trim().to_string()
}

/// Visible text of an element: text nodes trimmed, joined by a space, then normalized.
pub fn element_text(element: ElementRef) -> String {
    let joined = element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    normalize(&joined)
}

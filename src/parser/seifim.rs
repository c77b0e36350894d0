use std::sync::LazyLock;

use regex::Regex;

use super::keywords::extract_keywords;
use super::subject::truncate_chars;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^SIMAN\s+\d+").unwrap());
static SEIF_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.\s+([^0-9])").unwrap());
static NUMBER_DOT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.").unwrap());

pub const MIN_SEIF_CHARS: usize = 10;
const SEIF_SUBJECT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Seif {
    pub number: u32,
    pub content: String,
    pub subject: String,
    pub keywords: Vec<String>,
    pub length: usize,
    /// 1-based position among the seifim that survived filtering.
    pub order: usize,
}

/// Drop the `SIMAN n ...` header up to the first numbered seif. With no seif
/// after it only the marker itself goes, so the siman number is never read
/// as a seif label. Text without a marker is returned as is.
pub fn strip_header(content: &str) -> &str {
    let Some(marker) = MARKER_RE.find(content) else {
        return content;
    };
    match NUMBER_DOT_RE.find_at(content, marker.end()) {
        Some(first) => &content[first.start()..],
        None => &content[marker.end()..],
    }
}

/// Raw `n. text` fragments in order, before any length filtering.
pub fn split_fragments(body: &str) -> Vec<(u32, &str)> {
    let mut fragments = Vec::new();
    let mut pos = 0;
    while let Some(caps) = SEIF_START_RE.captures_at(body, pos) {
        let (Some(whole), Some(num), Some(first)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };
        // body runs lazily until the next "digits." or end of text
        let end = NUMBER_DOT_RE
            .find_at(body, first.end())
            .map(|m| m.start())
            .unwrap_or(body.len());
        // labels that overflow u32 are skipped
        if let Ok(number) = num.as_str().parse::<u32>() {
            fragments.push((number, &body[first.start()..end]));
        }
        pos = end.max(whole.start() + 1);
    }
    fragments
}

/// Split a siman's text into numbered seifim, dropping trivially short ones.
pub fn extract_seifim(content: &str) -> Vec<Seif> {
    split_fragments(strip_header(content))
        .into_iter()
        .filter_map(|(number, raw)| {
            let text = raw.trim();
            if text.chars().count() <= MIN_SEIF_CHARS {
                return None;
            }
            Some((number, text))
        })
        .enumerate()
        .map(|(i, (number, text))| Seif {
            number,
            content: text.to_string(),
            subject: seif_subject(text),
            keywords: extract_keywords(text),
            length: text.chars().count(),
            order: i + 1,
        })
        .collect()
}

/// First sentence of the seif, cut at 100 chars with an ellipsis.
pub fn seif_subject(text: &str) -> String {
    let first = text.split('.').next().unwrap_or_default().trim();
    if first.chars().count() > SEIF_SUBJECT_CHARS {
        format!("{}...", truncate_chars(first, SEIF_SUBJECT_CHARS))
    } else {
        first.to_string()
    }
}

// ── Tests ──

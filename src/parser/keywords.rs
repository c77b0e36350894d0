use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use super::vocab::STOP_WORDS;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());
static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

pub const MAX_KEYWORDS: usize = 10;
const MIN_TOKEN_CHARS: usize = 4;

/// Rank the most frequent significant words of `text`. Ties keep first
/// occurrence order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for m in WORD_RE.find_iter(&lower) {
        let word = m.as_str();
        if word.chars().count() < MIN_TOKEN_CHARS || STOP_SET.contains(word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word.to_string())
        .collect()
}

// ── Tests ──

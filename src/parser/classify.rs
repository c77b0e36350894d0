use super::vocab::{CATEGORY_KEYWORDS, FALLBACK_CATEGORY, TAG_KEYWORDS};

fn combined_text(subject: &str, content: &str) -> String {
    format!("{} {}", subject, content).to_lowercase()
}

/// Best category by number of distinct keywords present. Ties go to the
/// category that scored first.
pub fn categorize(subject: &str, content: &str) -> &'static str {
    let text = combined_text(subject, content);
    let mut scores: Vec<(&'static str, usize)> = Vec::new();
    for (keyword, category) in CATEGORY_KEYWORDS {
        if !text.contains(keyword) {
            continue;
        }
        match scores.iter_mut().find(|(c, _)| c == category) {
            Some((_, score)) => *score += 1,
            None => scores.push((*category, 1)),
        }
    }

    let mut best: Option<(&'static str, usize)> = None;
    for (category, score) in scores {
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((category, score));
        }
    }
    best.map(|(category, _)| category).unwrap_or(FALLBACK_CATEGORY)
}

/// Every tag with at least one keyword in the text, in vocabulary order.
pub fn extract_tags(subject: &str, content: &str) -> Vec<&'static str> {
    let text = combined_text(subject, content);
    TAG_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(tag, _)| *tag)
        .collect()
}

// ── Tests ──

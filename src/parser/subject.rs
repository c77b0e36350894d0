use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use super::vocab::{BASELINE_THEMES, THEME_KEYWORDS};
use crate::settings::Variant;

static EMPHASIZED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)SIMAN\s+\d+\s+\*\*(.*?)\*\*").unwrap());
static BOILERPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*Contains\s+\d+\s+(?:sections?|seifim|sub-units?|paragraphs?).*$").unwrap()
});
static PLAIN_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)SIMAN\s+\d+\s+([^1-9][^*\n]{10,100}?)(?:\n|Contains|$)").unwrap()
});
static FIRST_SENTENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)SIMAN\s+\d+\s+([^1-9][^*\n]{10,80}?)(?:\n|\.)").unwrap()
});
static BASELINE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)SIMAN\s+\d+\s+([^1-9].*?)(?:\n|$)").unwrap());
static BASELINE_SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)SIMAN\s+\d+\s+([^1-9].*?)(?:\n|\.)").unwrap());
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub const SUMMARY_CHARS: usize = 100;
pub const GENERIC_TITLE: &str = "Miscellaneous halachic laws";
const BASELINE_GENERIC_SUMMARY: &str = "Miscellaneous laws";
const BASELINE_MAX_CHARS: usize = 200;

/// Confidence of each extraction tier, highest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tiers {
    pub emphasized: f64,
    pub plain_title: f64,
    pub first_sentence: f64,
    pub themed: f64,
    pub generic: f64,
}

impl Tiers {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Enhanced => Tiers {
                emphasized: 0.95,
                plain_title: 0.9,
                first_sentence: 0.8,
                themed: 0.7,
                generic: 0.5,
            },
            Variant::Baseline => Tiers {
                emphasized: 0.9,
                plain_title: 0.8,
                first_sentence: 0.7,
                themed: 0.6,
                generic: 0.5,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectMatch {
    pub subject: String,
    pub summary: String,
    pub confidence: f64,
    pub is_original: bool,
}

impl SubjectMatch {
    fn original(subject: String, confidence: f64) -> Self {
        SubjectMatch {
            summary: truncate_chars(&subject, SUMMARY_CHARS),
            subject,
            confidence,
            is_original: true,
        }
    }

    fn generated(subject: String, summary: String, confidence: f64) -> Self {
        SubjectMatch {
            subject,
            summary,
            confidence,
            is_original: false,
        }
    }
}

type Matcher = fn(&str, &Tiers) -> Option<SubjectMatch>;

const ENHANCED_MATCHERS: &[Matcher] = &[emphasized_title, plain_title, first_sentence];
const BASELINE_MATCHERS: &[Matcher] = &[
    baseline_emphasized_title,
    baseline_rest_of_line,
    baseline_first_sentence,
];

/// Pull a subject out of a siman's text. Matchers run in priority order and
/// the first hit wins; otherwise a title is generated from the content.
pub fn extract_subject(content: &str, variant: Variant) -> SubjectMatch {
    let tiers = Tiers::for_variant(variant);
    let (matchers, fallback): (&[Matcher], Matcher) = match variant {
        Variant::Enhanced => (ENHANCED_MATCHERS, themed_title),
        Variant::Baseline => (BASELINE_MATCHERS, baseline_themed_title),
    };
    matchers
        .iter()
        .find_map(|m| m(content, &tiers).filter(|s| !s.subject.is_empty()))
        .or_else(|| fallback(content, &tiers))
        .unwrap_or_else(|| generic_title(variant, &tiers))
}

/// `SIMAN 12 **Title**`
fn emphasized_title(content: &str, tiers: &Tiers) -> Option<SubjectMatch> {
    let caps = EMPHASIZED_RE.captures(content)?;
    let raw = caps[1].trim();
    let subject = BOILERPLATE_RE.replace(raw, "").trim().to_string();
    Some(SubjectMatch::original(subject, tiers.emphasized))
}

/// `SIMAN 12 Title` on its own line, short and not itself a numbered seif.
fn plain_title(content: &str, tiers: &Tiers) -> Option<SubjectMatch> {
    let caps = PLAIN_TITLE_RE.captures(content)?;
    let subject = caps[1].trim();
    if NUMBERED_RE.is_match(subject) || subject.chars().count() >= 150 {
        return None;
    }
    Some(SubjectMatch::original(subject.to_string(), tiers.plain_title))
}

/// First sentence after the marker.
fn first_sentence(content: &str, tiers: &Tiers) -> Option<SubjectMatch> {
    let caps = FIRST_SENTENCE_RE.captures(content)?;
    let subject = caps[1].trim();
    if NUMBERED_RE.is_match(subject) || subject.chars().count() >= 100 {
        return None;
    }
    Some(SubjectMatch::original(subject.to_string(), tiers.first_sentence))
}

fn baseline_emphasized_title(content: &str, tiers: &Tiers) -> Option<SubjectMatch> {
    let caps = EMPHASIZED_RE.captures(content)?;
    Some(SubjectMatch::original(caps[1].trim().to_string(), tiers.emphasized))
}

fn baseline_rest_of_line(content: &str, tiers: &Tiers) -> Option<SubjectMatch> {
    let caps = BASELINE_LINE_RE.captures(content)?;
    Some(SubjectMatch::original(
        collapse_and_cap(&caps[1]),
        tiers.plain_title,
    ))
}

fn baseline_first_sentence(content: &str, tiers: &Tiers) -> Option<SubjectMatch> {
    let caps = BASELINE_SENTENCE_RE.captures(content)?;
    Some(SubjectMatch::original(
        collapse_and_cap(&caps[1]),
        tiers.first_sentence,
    ))
}

fn collapse_and_cap(raw: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(raw.trim(), " ");
    if collapsed.chars().count() > BASELINE_MAX_CHARS {
        format!("{}...", truncate_chars(&collapsed, BASELINE_MAX_CHARS))
    } else {
        collapsed.into_owned()
    }
}

/// Themes named anywhere in the text, in vocabulary order.
pub fn find_themes(content: &str) -> Vec<&'static str> {
    let lower = content.to_lowercase();
    THEME_KEYWORDS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, theme)| *theme)
        .collect()
}

/// Only the first two themes make it into the title; any further ones are
/// dropped.
pub fn title_from_themes(themes: &[&str]) -> Option<String> {
    match themes {
        [] => None,
        [only] => Some(format!("Laws concerning {}", only)),
        [first, second] => Some(format!("Laws concerning {} and {}", first, second)),
        [first, second, ..] => Some(format!("Laws concerning {}, {}", first, second)),
    }
}

fn themed_title(content: &str, tiers: &Tiers) -> Option<SubjectMatch> {
    let title = title_from_themes(&find_themes(content))?;
    Some(SubjectMatch::generated(title.clone(), title, tiers.themed))
}

fn baseline_themed_title(content: &str, tiers: &Tiers) -> Option<SubjectMatch> {
    let lower = content.to_lowercase();
    let found: Vec<&str> = BASELINE_THEMES
        .iter()
        .copied()
        .filter(|keyword| lower.contains(keyword))
        .collect();
    if found.is_empty() {
        return None;
    }
    let title = format!("Laws concerning {}", found.iter().take(3).join(", "));
    Some(SubjectMatch::generated(title.clone(), title, tiers.themed))
}

fn generic_title(variant: Variant, tiers: &Tiers) -> SubjectMatch {
    let summary = match variant {
        Variant::Enhanced => GENERIC_TITLE,
        Variant::Baseline => BASELINE_GENERIC_SUMMARY,
    };
    SubjectMatch::generated(GENERIC_TITLE.to_string(), summary.to_string(), tiers.generic)
}

pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn enhanced(content: &str) -> SubjectMatch {
        extract_subject(content, Variant::Enhanced)
    }

    #[test]
    fn emphasized_title_wins() {
        let m = enhanced("SIMAN 1 **Laws of meat** 1. One must not mix meat and milk.");
        assert_eq!(m.subject, "Laws of meat");
        assert_eq!(m.summary, "Laws of meat");
        assert_eq!(m.confidence, 0.95);
        assert!(m.is_original);
    }

    #[test]
    fn emphasized_title_strips_boilerplate() {
        let m = enhanced("SIMAN 4 **Laws of the marketplace Contains 12 seifim** 1. text here");
        assert_eq!(m.subject, "Laws of the marketplace");
        let m = enhanced("SIMAN 4 **Blessings over bread Contains 3 sections** 1. text");
        assert_eq!(m.subject, "Blessings over bread");
    }

    #[test]
    fn plain_title_on_its_own_line() {
        let m = enhanced("SIMAN 7 Laws of washing the hands\n1. In the morning one washes.");
        assert_eq!(m.subject, "Laws of washing the hands");
        assert_eq!(m.confidence, 0.9);
        assert!(m.is_original);
    }

    #[test]
    fn plain_title_stops_at_boilerplate() {
        let m = enhanced("SIMAN 7 Laws of washing the hands Contains 4 seifim\n1. text");
        assert_eq!(m.subject, "Laws of washing the hands");
    }

    #[test]
    fn first_sentence_when_line_is_too_long() {
        // 101+ chars on the line defeats the plain-title window, the sentence fits.
        let content = format!(
            "SIMAN 3 Laws of the morning blessing. {}\n1. text",
            "x".repeat(120)
        );
        let m = enhanced(&content);
        assert_eq!(m.subject, "Laws of the morning blessing");
        assert_eq!(m.confidence, 0.8);
    }

    #[test]
    fn numbered_start_is_not_a_title() {
        // the digit right after the marker rules out every title tier
        let m = enhanced("SIMAN 2 1. One who slaughters an animal for the festival meal.");
        assert!(!m.is_original);
        assert_eq!(m.subject, "Laws concerning Festival and Animal");
    }

    #[test]
    fn empty_emphasis_falls_through() {
        let m = enhanced("SIMAN 9 **** Contains nothing useful");
        assert!(!m.subject.is_empty());
    }

    #[test]
    fn theme_titles() {
        assert_eq!(title_from_themes(&["Meat"]).unwrap(), "Laws concerning Meat");
        assert_eq!(
            title_from_themes(&["Meat", "Milk"]).unwrap(),
            "Laws concerning Meat and Milk"
        );
        assert_eq!(
            title_from_themes(&["Meat", "Milk", "Bread"]).unwrap(),
            "Laws concerning Meat, Milk"
        );
        assert_eq!(title_from_themes(&[]), None);
    }

    #[test]
    fn generated_title_from_themes() {
        let m = enhanced("Whoever lights a fire near bread must be careful.");
        assert_eq!(m.subject, "Laws concerning Bread and Fire");
        assert_eq!(m.confidence, 0.7);
        assert!(!m.is_original);
    }

    #[test]
    fn one_word_yields_one_theme() {
        let m = enhanced("Each prayer is said slowly.");
        assert_eq!(m.subject, "Laws concerning Prayer");
        let m = enhanced("The children of the family.");
        assert_eq!(m.subject, "Laws concerning Children and Family");
    }

    #[test]
    fn generic_title_when_nothing_matches() {
        let m = enhanced("General remarks without any recognizable heading.");
        assert_eq!(m.subject, GENERIC_TITLE);
        assert_eq!(m.confidence, 0.5);
        assert!(!m.is_original);
    }

    #[test]
    fn confidence_strictly_decreases() {
        for variant in [Variant::Enhanced, Variant::Baseline] {
            let t = Tiers::for_variant(variant);
            let order = [t.emphasized, t.plain_title, t.first_sentence, t.themed, t.generic];
            assert!(order.windows(2).all(|w| w[0] > w[1]), "{:?}", variant);
        }
    }

    #[test]
    fn summary_is_capped() {
        let long = "a".repeat(140);
        let m = enhanced(&format!("SIMAN 1 **{}**", long));
        assert_eq!(m.subject.chars().count(), 140);
        assert_eq!(m.summary.chars().count(), SUMMARY_CHARS);
    }

    #[test]
    fn baseline_keeps_boilerplate_and_lower_confidence() {
        let m = extract_subject("SIMAN 4 **Bread Contains 3 sections** 1. text", Variant::Baseline);
        assert_eq!(m.subject, "Bread Contains 3 sections");
        assert_eq!(m.confidence, 0.9);
    }

    #[test]
    fn baseline_takes_rest_of_line() {
        let m = extract_subject("SIMAN 5   Laws   of   the   synagogue\n1. text", Variant::Baseline);
        assert_eq!(m.subject, "Laws of the synagogue");
        assert_eq!(m.confidence, 0.8);
    }

    #[test]
    fn baseline_generated_lists_three_keywords() {
        let m = extract_subject(
            "On shabbat in the synagogue a prayer for the family is said.",
            Variant::Baseline,
        );
        assert_eq!(m.subject, "Laws concerning synagogue, prayer, shabbat");
        assert_eq!(m.confidence, 0.6);
    }

    #[test]
    fn baseline_generic_summary() {
        let m = extract_subject("Nothing to see here.", Variant::Baseline);
        assert_eq!(m.subject, GENERIC_TITLE);
        assert_eq!(m.summary, "Miscellaneous laws");
        assert_eq!(m.confidence, 0.5);
    }
}

pub mod classify;
pub mod keywords;
pub mod seifim;
pub mod subject;
pub mod vocab;

use crate::error::RowError;
use crate::input::InputRow;
use crate::settings::Variant;
use seifim::Seif;

/// A siman after subject extraction, seif splitting and classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Siman {
    pub original_id: String,
    pub chapter_id: String,
    pub subject: String,
    pub subject_summary: String,
    pub category: &'static str,
    pub tags: Vec<&'static str>,
    pub seifim: Vec<Seif>,
    pub confidence: f64,
    pub keywords: Vec<String>,
    pub has_original_subject: bool,
}

/// Subject → seifim → category → tags → keywords for one row. The id ends up
/// as a foreign key in every emitted table, so a blank one is rejected.
pub fn process_siman(row: &InputRow, variant: Variant) -> Result<Siman, RowError> {
    if row.id.trim().is_empty() {
        return Err(RowError::BlankId);
    }
    let content = row.content.as_str();
    let found = subject::extract_subject(content, variant);
    let seifim = seifim::extract_seifim(content);
    let category = classify::categorize(&found.subject, content);
    let tags = classify::extract_tags(&found.subject, content);
    let keywords = keywords::extract_keywords(&format!("{} {}", found.subject, content));

    Ok(Siman {
        original_id: row.id.clone(),
        chapter_id: row.chapter_id.clone(),
        subject: found.subject,
        subject_summary: found.summary,
        category,
        tags,
        seifim,
        confidence: found.confidence,
        keywords,
        has_original_subject: found.is_original,
    })
}

// ── Tests ──

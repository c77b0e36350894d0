use itertools::Itertools;
use uuid::Uuid;

use crate::parser::seifim::Seif;
use crate::parser::Siman;
use crate::settings::Variant;

const BANNER_RULE: &str = "-- =====================================================";
const TAG_RELEVANCE: f64 = 1.0;

/// Double single quotes. Nothing else is escaped: the output is meant for a
/// controlled load step, not for untrusted input.
pub fn escape(text: &str) -> String {
    text.replace('\'', "''")
}

/// Postgres text-array literal, e.g. `{"meat","milk"}`.
pub fn keyword_array(keywords: &[String]) -> String {
    format!("{{{}}}", keywords.iter().map(|k| format!("\"{}\"", k)).join(","))
}

/// Floats always carry a decimal point (`1.0`, `0.95`).
fn number(value: f64) -> String {
    format!("{:?}", value)
}

fn subject_kind(siman: &Siman, variant: Variant) -> &'static str {
    match variant {
        Variant::Baseline => "extracted",
        Variant::Enhanced if siman.has_original_subject => "original",
        Variant::Enhanced => "generated",
    }
}

pub fn subject_insert(siman: &Siman, variant: Variant) -> String {
    format!(
        "INSERT INTO subjects (id, siman_id, chapter_id, subject, subject_summary, kind, confidence, keywords) VALUES\n\
         ('{}', '{}', '{}', '{}', '{}', '{}', {}, '{}');",
        Uuid::new_v4(),
        escape(&siman.original_id),
        escape(&siman.chapter_id),
        escape(&siman.subject),
        escape(&siman.subject_summary),
        subject_kind(siman, variant),
        number(siman.confidence),
        escape(&keyword_array(&siman.keywords)),
    )
}

pub fn seif_insert(siman: &Siman, seif: &Seif) -> String {
    format!(
        "INSERT INTO seifim (id, siman_id, chapter_id, seif_number, content, subject, keywords, length, order_index) VALUES\n\
         ('{}', '{}', '{}', {}, '{}', '{}', '{}', {}, {});",
        Uuid::new_v4(),
        escape(&siman.original_id),
        escape(&siman.chapter_id),
        seif.number,
        escape(&seif.content),
        escape(&seif.subject),
        escape(&keyword_array(&seif.keywords)),
        seif.length,
        seif.order,
    )
}

pub fn category_insert(siman: &Siman) -> String {
    format!(
        "INSERT INTO siman_categories (id, siman_id, category_id, confidence) VALUES\n\
         ('{}', '{}', (SELECT id FROM categories WHERE name = '{}'), {});",
        Uuid::new_v4(),
        escape(&siman.original_id),
        escape(siman.category),
        number(siman.confidence),
    )
}

pub fn tag_insert(siman: &Siman, tag: &str) -> String {
    format!(
        "INSERT INTO siman_tags (id, siman_id, tag_id, relevance) VALUES\n\
         ('{}', '{}', (SELECT id FROM tags WHERE name = '{}'), {});",
        Uuid::new_v4(),
        escape(&siman.original_id),
        escape(tag),
        number(TAG_RELEVANCE),
    )
}

fn push_banner(parts: &mut Vec<String>, title: &str, first: bool) {
    if first {
        parts.push(BANNER_RULE.to_string());
    } else {
        parts.push(format!("\n{}", BANNER_RULE));
    }
    parts.push(format!("-- {}", title));
    parts.push(BANNER_RULE.to_string());
}

/// Render every processed siman as four banner-separated blocks: subjects,
/// seifim, category links, tag links.
pub fn render(simanim: &[Siman], variant: Variant) -> String {
    let mut parts: Vec<String> = Vec::new();

    push_banner(&mut parts, "PROCESSED SUBJECTS", true);
    for siman in simanim {
        parts.push(format!("\n{}", subject_insert(siman, variant)));
    }

    push_banner(&mut parts, "PROCESSED SEIFIM", false);
    for siman in simanim {
        for seif in &siman.seifim {
            parts.push(format!("\n{}", seif_insert(siman, seif)));
        }
    }

    push_banner(&mut parts, "CATEGORY LINKS", false);
    for siman in simanim {
        parts.push(format!("\n{}", category_insert(siman)));
    }

    push_banner(&mut parts, "TAG LINKS", false);
    for siman in simanim {
        for tag in &siman.tags {
            parts.push(format!("\n{}", tag_insert(siman, tag)));
        }
    }

    parts.join("\n")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputRow;
    use crate::parser::process_siman;
    use std::collections::HashSet;

    fn siman(id: &str, content: &str) -> Siman {
        let row = InputRow {
            id: id.to_string(),
            chapter_id: "c1".to_string(),
            content: content.to_string(),
        };
        process_siman(&row, Variant::Enhanced).unwrap()
    }

    fn uuids(sql: &str) -> Vec<&str> {
        sql.lines()
            .filter(|l| l.starts_with("('"))
            .filter_map(|l| l.get(2..38))
            .collect()
    }

    #[test]
    fn escape_doubles_quotes_only() {
        assert_eq!(escape("the 'kosher' cook's \"pot\""), "the ''kosher'' cook''s \"pot\"");
    }

    #[test]
    fn keyword_array_literal() {
        let kw = vec!["meat".to_string(), "milk".to_string()];
        assert_eq!(keyword_array(&kw), r#"{"meat","milk"}"#);
        assert_eq!(keyword_array(&[]), "{}");
    }

    #[test]
    fn floats_keep_decimal_point() {
        assert_eq!(number(1.0), "1.0");
        assert_eq!(number(0.95), "0.95");
        assert_eq!(number(0.5), "0.5");
    }

    #[test]
    fn sections_in_fixed_order() {
        let s = siman(
            "s1",
            "SIMAN 1 **Laws of meat** 1. One must not mix meat and milk. 2. A woman may cook meat for the household.",
        );
        let sql = render(&[s], Variant::Enhanced);
        let subjects = sql.find("INSERT INTO subjects").unwrap();
        let seifim = sql.find("INSERT INTO seifim").unwrap();
        let categories = sql.find("INSERT INTO siman_categories").unwrap();
        let tags = sql.find("INSERT INTO siman_tags").unwrap();
        assert!(subjects < seifim && seifim < categories && categories < tags);
        assert!(sql.starts_with(BANNER_RULE));
        assert_eq!(sql.matches("-- PROCESSED").count(), 2);
        assert!(sql.contains("(SELECT id FROM categories WHERE name = 'Kashrut'), 0.95);"));
        assert!(sql.contains("'original', 0.95,"));
        assert!(sql.contains("(SELECT id FROM tags WHERE name = 'woman'), 1.0);"));
    }

    #[test]
    fn one_insert_per_row_and_unique_ids() {
        let a = siman("s1", "SIMAN 1 **Laws of meat** 1. One must not mix meat and milk. 2. Selling meat to a merchant is restricted.");
        let b = siman("s2", "General remarks without any recognizable heading.");
        let expected_tags = a.tags.len() + b.tags.len();
        let sql = render(&[a, b], Variant::Enhanced);
        assert_eq!(sql.matches("INSERT INTO subjects").count(), 2);
        assert_eq!(sql.matches("INSERT INTO seifim").count(), 2);
        assert_eq!(sql.matches("INSERT INTO siman_categories").count(), 2);
        assert_eq!(sql.matches("INSERT INTO siman_tags").count(), expected_tags);
        assert!(sql.contains("'generated', 0.5,"));

        let ids = uuids(&sql);
        assert_eq!(ids.len(), 6 + expected_tags);
        assert!(ids.iter().all(|id| Uuid::parse_str(id).is_ok()));
        let unique: HashSet<&&str> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn quotes_survive_round_trip() {
        let s = siman("s'1", "SIMAN 1 **The cook's pot** 1. A pot that held the neighbour's meat is kashered.");
        let sql = render(&[s.clone()], Variant::Enhanced);
        assert!(sql.contains("'The cook''s pot'"));
        assert!(sql.contains("'s''1'"));
        let restored = sql.replace("''", "'");
        assert!(restored.contains(&s.subject));
        assert!(restored.contains(&s.seifim[0].content));
    }

    #[test]
    fn baseline_marks_everything_extracted() {
        let s = siman("s1", "SIMAN 1 **Laws of meat** 1. One must not mix meat and milk.");
        let sql = render(&[s], Variant::Baseline);
        assert!(sql.contains("'extracted'"));
        assert!(!sql.contains("'original'"));
    }
}

//! Fixed keyword tables. Definition order is iteration order everywhere these
//! are scanned, so reordering entries changes tie-breaks and generated titles.
//! Matching is by substring: no keyword may contain another keyword of a
//! different entry in the same table, or one word scores twice.

/// Keyword → category. Several keywords may feed one category.
pub const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("kashrut", "Kashrut"),
    ("meat", "Kashrut"),
    ("food", "Kashrut"),
    ("meal", "Kashrut"),
    ("market", "Kashrut"),
    ("merchant", "Kashrut"),
    ("idolater", "Kashrut"),
    ("synagogue", "Synagogue"),
    ("prayer", "Prayers"),
    ("praying", "Prayers"),
    ("shabbat", "Shabbat"),
    ("marriage", "Marriage"),
    ("wife", "Marriage"),
    ("husband", "Marriage"),
    ("family", "Family"),
    ("children", "Family"),
    ("commerce", "Commerce"),
    ("contract", "Commerce"),
    ("justice", "Justice"),
    ("court", "Justice"),
    ("witness", "Justice"),
    ("tzedakah", "Tzedakah"),
    ("charity", "Tzedakah"),
    ("chanukah", "Festivals"),
    ("festival", "Festivals"),
    ("purification", "Purity"),
    ("purity", "Purity"),
];

pub const FALLBACK_CATEGORY: &str = "Miscellaneous";

/// Tag → keywords; a tag applies when any of its keywords occurs.
pub const TAG_KEYWORDS: &[(&str, &[&str])] = &[
    ("obligation", &["obligated", "must", "required", "mitzvah"]),
    ("prohibition", &["forbidden", "may not", "prohibited", "unlawful"]),
    ("permission", &["permitted", "allowed", "authorized", "lawful"]),
    ("custom", &["custom", "tradition", "practice", "habit"]),
    ("emergency", &["emergency", "urgent", "necessity", "special case"]),
    ("woman", &["woman", "women", "wife", "daughter"]),
    ("man", &["husband", "masculine", "father", "groom"]),
    ("child", &["child", "minor", "infant", "youth"]),
    ("elderly", &["elderly", "aged person", "elder", "old age"]),
    ("sick", &["sick", "ill person", "illness", "health"]),
    ("travel", &["journey", "travel", "road", "wayfarer"]),
    ("home", &["house", "domestic", "household", "residence"]),
    ("community", &["community", "public", "congregation", "collective"]),
    ("individual", &["individual", "personal", "private", "person"]),
];

/// Keyword → theme label used by the enhanced title generator.
pub const THEME_KEYWORDS: &[(&str, &str)] = &[
    ("meat", "Meat"),
    ("market", "Market"),
    ("merchant", "Merchant"),
    ("idolater", "Idolater"),
    ("synagogue", "Synagogue"),
    ("prayer", "Prayer"),
    ("praying", "Prayer"),
    ("shabbat", "Shabbat"),
    ("marriage", "Marriage"),
    ("wife", "Wife"),
    ("husband", "Husband"),
    ("children", "Children"),
    ("family", "Family"),
    ("commerce", "Commerce"),
    ("contract", "Contract"),
    ("justice", "Justice"),
    ("court", "Court"),
    ("witness", "Witness"),
    ("tzedakah", "Tzedakah"),
    ("charity", "Charity"),
    ("chanukah", "Chanukah"),
    ("festival", "Festival"),
    ("purification", "Purification"),
    ("purity", "Purity"),
    ("blood", "Blood"),
    ("milk", "Milk"),
    ("wine", "Wine"),
    ("bread", "Bread"),
    ("water", "Water"),
    ("fire", "Fire"),
    ("blaze", "Blaze"),
    ("animal", "Animal"),
    ("field", "Field"),
    ("house", "House"),
    ("journey", "Journey"),
    ("sick", "Sick"),
    ("elderly", "Elderly"),
    ("infant", "Infant"),
];

/// Shorter keyword list scanned by the baseline title generator; the keyword
/// itself is the label.
pub const BASELINE_THEMES: &[&str] = &[
    "meat",
    "synagogue",
    "prayer",
    "shabbat",
    "marriage",
    "commerce",
    "justice",
    "tzedakah",
    "festival",
    "purity",
    "family",
];

/// Tokens dropped before keyword ranking. Only words longer than three chars
/// matter since shorter tokens are filtered anyway.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "not", "but", "are", "was", "with", "that", "this", "from", "into",
    "onto", "upon", "have", "has", "had", "been", "being", "were", "will", "shall", "should",
    "would", "could", "must", "they", "them", "their", "there", "then", "than", "thus", "also",
    "very", "more", "less", "most", "some", "other", "others", "same", "different", "such",
    "only", "even", "when", "where", "which", "while", "what", "whom", "whose", "however",
    "therefore", "although", "because", "about", "after", "before", "does", "done", "each",
    "every", "these", "those", "your", "yours", "ours", "over", "under",
];

// ── Tests ──

use std::collections::HashSet;

use tracing::info;

use crate::parser::Siman;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub processed: usize,
    pub failed: usize,
    pub original_subjects: usize,
    pub generated_subjects: usize,
    pub seifim: usize,
    pub unique_tags: usize,
}

impl RunStats {
    pub fn collect(simanim: &[Siman], failed: usize) -> Self {
        let original_subjects = simanim.iter().filter(|s| s.has_original_subject).count();
        let unique_tags: HashSet<&str> = simanim
            .iter()
            .flat_map(|s| s.tags.iter().copied())
            .collect();
        RunStats {
            processed: simanim.len(),
            failed,
            original_subjects,
            generated_subjects: simanim.len() - original_subjects,
            seifim: simanim.iter().map(|s| s.seifim.len()).sum(),
            unique_tags: unique_tags.len(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Statistics:\n");
        out.push_str(&format!("   - Simanim processed: {}\n", self.processed));
        out.push_str(&format!("   - Original subjects: {}\n", self.original_subjects));
        out.push_str(&format!("   - Generated subjects: {}\n", self.generated_subjects));
        out.push_str(&format!("   - Seifim extracted: {}\n", self.seifim));
        out.push_str(&format!("   - Unique tags: {}\n", self.unique_tags));
        if self.failed > 0 {
            out.push_str(&format!("   - Rows skipped: {}\n", self.failed));
        }
        out
    }

    pub fn print(&self) {
        info!(
            processed = self.processed,
            failed = self.failed,
            original = self.original_subjects,
            generated = self.generated_subjects,
            seifim = self.seifim,
            unique_tags = self.unique_tags,
            "run finished"
        );
        println!("\n{}", self.render());
    }
}

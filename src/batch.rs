use tracing::{debug, warn};

use crate::input::RowResult;
use crate::parser::{process_siman, Siman};
use crate::settings::Variant;

pub const PROGRESS_EVERY: usize = 100;

#[derive(Debug, Default)]
pub struct BatchOutput {
    pub simanim: Vec<Siman>,
    pub failed: usize,
    /// Row indices a progress line was printed for.
    pub progress: Vec<usize>,
}

/// Process rows in file order. A row that failed to decode or assemble is
/// logged with its index and skipped; the batch always runs to the end.
pub fn run<I>(rows: I, variant: Variant) -> BatchOutput
where
    I: IntoIterator<Item = RowResult>,
{
    let mut out = BatchOutput::default();
    for (i, row) in rows.into_iter().enumerate() {
        if i % PROGRESS_EVERY == 0 {
            println!("Processing row {}...", i);
            out.progress.push(i);
        }
        match row.and_then(|row| process_siman(&row, variant)) {
            Ok(siman) => {
                debug!(row = i, id = %siman.original_id, subject = %siman.subject, "processed");
                out.simanim.push(siman);
            }
            Err(e) => {
                warn!(row = i, error = %e, "skipping row");
                println!("Error processing row {}: {}", i, e);
                out.failed += 1;
            }
        }
    }
    out
}

//! Pattern extraction from pasted clinical text.
//!
//! Two extractors produce partial [`StructuredRecord`]s from free text:
//! [`extract_from_clinical_note`] for a raw SOAP paste and [`extract_from_surgical_memo`] for a
//! surgical schedule memo. Both are total: unmatched fields stay at their defaults.
//!
//! [`extract_all`] combines them through the ordered merge pipeline, clinical note first and
//! memo last, so the memo wins every field both supply.

mod clinical_note;
mod identity;
mod patterns;
mod surgical_memo;

pub use clinical_note::extract_from_clinical_note;
pub use surgical_memo::extract_from_surgical_memo;

use crate::record::{merge_pipeline, StructuredRecord};

/// Runs both extractors over whichever pastes are present and merges the results.
pub fn extract_all(note: Option<&str>, memo: Option<&str>) -> StructuredRecord {
    let passes = [
        note.map(extract_from_clinical_note),
        memo.map(extract_from_surgical_memo),
    ];
    merge_pipeline(passes.into_iter().flatten())
}

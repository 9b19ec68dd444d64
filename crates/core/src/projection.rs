//! Mapping from dataset records to the public response shapes.

use crate::selector::DailySelection;
use crate::verse::{DailyVerseResponse, VerseRecord, VerseResponse};

/// Project a raw record into its public shape.
///
/// The Telugu text is the two dataset parts joined by a single space,
/// kept verbatim even when a part is empty.
#[must_use]
pub fn project(record: &VerseRecord) -> VerseResponse {
    VerseResponse {
        id: record.sequence_number,
        english: record.english_text.clone(),
        english_reference: record.english_reference.clone(),
        telugu: format!("{} {}", record.telugu_text_part1, record.telugu_text_part2),
        telugu_reference: record.telugu_reference.clone(),
        background_image: record.background_image_description.clone(),
    }
}

#[must_use]
pub fn project_daily(
    record: &VerseRecord,
    selection: DailySelection,
    total_verses: usize,
) -> DailyVerseResponse {
    DailyVerseResponse { verse: project(record), day_number: selection.day_number, total_verses }
}

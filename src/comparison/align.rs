use crate::models::{ComparisonRow, ComparisonTable};
use crate::utils::lines::split_lines;

/// Pair the lines of both texts by position, padding the shorter side with
/// empty strings. Row `i` holds line `i` of each text.
///
/// This is a positional pairing, not a diff: one inserted line shifts every
/// later row. Two empty texts give an empty table.
pub fn align(extracted: &str, validated: &str) -> ComparisonTable {
    let extracted_lines = split_lines(extracted);
    let validated_lines = split_lines(validated);
    let row_count = extracted_lines.len().max(validated_lines.len());

    let rows = (0..row_count)
        .map(|i| {
            ComparisonRow::new(
                extracted_lines.get(i).copied().unwrap_or(""),
                validated_lines.get(i).copied().unwrap_or(""),
            )
        })
        .collect();

    ComparisonTable::from_rows(rows)
}

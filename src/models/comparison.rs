use serde::{Deserialize, Serialize};

/// One positional pair of lines. A side that ran out of lines holds `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Line from the extracted text.
    pub extracted: String,
    /// Line from the validated text.
    pub validated: String,
}

impl ComparisonRow {
    pub fn new(extracted: &str, validated: &str) -> Self {
        Self {
            extracted: extracted.to_string(),
            validated: validated.to_string(),
        }
    }

    /// True when both sides hold the same line.
    pub fn is_unchanged(&self) -> bool {
        self.extracted == self.validated
    }
}

/// Line-by-line, length-equalized view of two texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn from_rows(rows: Vec<ComparisonRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows whose two sides differ.
    pub fn changed_rows(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_unchanged()).count()
    }

    pub fn into_rows(self) -> Vec<ComparisonRow> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ComparisonTable {
    type Item = &'a ComparisonRow;
    type IntoIter = std::slice::Iter<'a, ComparisonRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

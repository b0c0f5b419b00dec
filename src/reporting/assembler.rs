use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::ExportFormat;
use crate::errors::InkcheckError;
use crate::models::{ComparisonTable, ExportRecord, RunMetadata};
use crate::reporting::formatter::format_report_markdown;

pub const TEXT_FILE: &str = "extracted_data.txt";
pub const JSON_FILE: &str = "extracted_data.json";
pub const MARKDOWN_FILE: &str = "comparison.md";
pub const METADATA_FILE: &str = "metadata.json";

/// Serialize with a four-space indent.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, InkcheckError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| InkcheckError::Internal(format!("Non UTF-8 JSON output: {}", e)))
}

/// Write the requested deliverables for one run plus `metadata.json`.
/// Returns the written paths in write order.
pub async fn write_deliverables(
    output_dir: &Path,
    record: &ExportRecord,
    metadata: &RunMetadata,
    table: &ComparisonTable,
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>, InkcheckError> {
    tokio::fs::create_dir_all(output_dir).await?;
    let mut written = Vec::new();

    for format in formats {
        let (name, content) = match format {
            ExportFormat::Txt => (TEXT_FILE, record.extracted_data.clone()),
            ExportFormat::Json => (JSON_FILE, to_json_pretty(record)?),
            ExportFormat::Markdown => (
                MARKDOWN_FILE,
                format_report_markdown(
                    &record.extracted_data,
                    &record.validated_data,
                    &metadata.breakdown,
                    table,
                ),
            ),
        };
        let path = output_dir.join(name);
        tokio::fs::write(&path, content).await?;
        written.push(path);
    }

    let metadata_path = output_dir.join(METADATA_FILE);
    tokio::fs::write(&metadata_path, to_json_pretty(metadata)?).await?;
    written.push(metadata_path);

    info!(dir = %output_dir.display(), files = written.len(), run_id = %metadata.run_id, "Deliverables written");
    Ok(written)
}

pub async fn read_export_record(path: &Path) -> Result<ExportRecord, InkcheckError> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}

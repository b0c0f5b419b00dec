use std::path::Path;

use crate::errors::InkcheckError;
use crate::models::RunMetadata;
use super::assembler::METADATA_FILE;

/// Load `metadata.json` from a deliverables directory, if present.
pub async fn load_run_metadata(output_dir: &Path) -> Result<Option<RunMetadata>, InkcheckError> {
    let path = output_dir.join(METADATA_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let json = tokio::fs::read_to_string(&path).await?;
    Ok(Some(serde_json::from_str(&json)?))
}

use std::path::{Path, PathBuf};

use console::style;
use serde_json::json;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::cli::commands::ScoreArgs;
use crate::cli::render;
use crate::comparison::{align, line_change_counts, score_breakdown, unified_diff};
use crate::config::ExportFormat;
use crate::errors::InkcheckError;
use crate::models::{ExportRecord, RunMetadata};
use crate::reporting::write_deliverables;

const DIFF_CONTEXT: usize = 3;
const STDIN: &str = "-";

/// Stdin can feed at most one of the two texts.
fn check_sources(extracted: &str, validated: &str) -> Result<(), InkcheckError> {
    if extracted == STDIN && validated == STDIN {
        return Err(InkcheckError::InvalidInput(
            "--extracted and --validated cannot both read from stdin".to_string(),
        ));
    }
    Ok(())
}

async fn read_text(source: &str) -> Result<String, InkcheckError> {
    if source == STDIN {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        return Ok(buf);
    }
    tokio::fs::read_to_string(Path::new(source))
        .await
        .map_err(|e| InkcheckError::Io(std::io::Error::new(e.kind(), format!("{}: {}", source, e))))
}

pub async fn handle_score(args: ScoreArgs, quiet: bool) -> Result<(), InkcheckError> {
    check_sources(&args.extracted, &args.validated)?;
    let extracted = read_text(&args.extracted).await?;
    let validated = read_text(&args.validated).await?;

    let breakdown = score_breakdown(&extracted, &validated);
    let table = align(&extracted, &validated);
    info!(score = breakdown.total, rows = table.len(), "Scored offline");

    if let Some(dir) = &args.output {
        let record = ExportRecord {
            extracted_data: extracted.clone(),
            validated_data: validated.clone(),
            score: breakdown.total,
        };
        let metadata = RunMetadata::offline(breakdown, table.len(), table.changed_rows());
        let written = write_deliverables(&PathBuf::from(dir), &record, &metadata, &table, &ExportFormat::ALL).await?;
        if !quiet && !args.json {
            for path in &written {
                println!("{} {}", style("wrote").dim(), path.display());
            }
        }
    }

    if args.json {
        let mut out = json!({
            "score": breakdown.total,
            "rows": table,
        });
        if args.breakdown {
            out["breakdown"] = serde_json::to_value(breakdown)?;
        }
        if args.diff {
            let (inserted, deleted) = line_change_counts(&extracted, &validated);
            out["diff"] = json!(unified_diff(&extracted, &validated, DIFF_CONTEXT));
            out["diff_stats"] = json!({ "inserted": inserted, "deleted": deleted });
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if quiet {
        println!("{}", breakdown.total);
        return Ok(());
    }

    println!("{}", render::score_card(&breakdown, args.breakdown));
    println!("{}", render::comparison_card(&table));
    if args.diff {
        let counts = line_change_counts(&extracted, &validated);
        println!("{}", render::diff_card(&unified_diff(&extracted, &validated, DIFF_CONTEXT), counts));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_for_one_side_only() {
        assert!(check_sources("-", "v.txt").is_ok());
        assert!(check_sources("e.txt", "-").is_ok());
        assert!(check_sources("e.txt", "v.txt").is_ok());
    }

    #[tokio::test]
    async fn test_both_sides_from_stdin_rejected() {
        let args = ScoreArgs {
            extracted: "-".into(),
            validated: "-".into(),
            json: false,
            breakdown: false,
            diff: false,
            output: None,
        };
        let err = handle_score(args, true).await.unwrap_err();
        assert!(matches!(err, InkcheckError::InvalidInput(_)));
        assert_eq!(err.exit_code(), 1);
    }
}

use std::path::PathBuf;

use console::style;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::commands::ProcessArgs;
use crate::cli::progress::RunProgress;
use crate::cli::render;
use crate::config::{self, InkcheckConfig};
use crate::errors::InkcheckError;
use crate::llm::provider_from_config;
use crate::pipeline::image::read_image;
use crate::pipeline::{PipelineConfig, PipelineOrchestrator};
use crate::reporting::write_deliverables;

pub async fn load_optional_config(path: Option<&str>) -> Result<InkcheckConfig, InkcheckError> {
    match path {
        Some(p) => config::parse_config(&PathBuf::from(p)).await,
        None => Ok(InkcheckConfig::default()),
    }
}

pub async fn handle_process(args: ProcessArgs, quiet: bool) -> Result<(), InkcheckError> {
    let file_config = load_optional_config(args.config.as_deref()).await?;

    // Reject bad uploads before touching credentials or the network.
    let image = read_image(&PathBuf::from(&args.image)).await?;
    let llm = provider_from_config(&file_config, args.model.as_deref(), args.api_key.as_deref())?;
    let pipeline_config = PipelineConfig::from_config(&file_config);
    let run_id = pipeline_config.run_id.clone();

    info!(run_id = %run_id, image = %args.image, model = llm.model_name(), "Starting run");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let orchestrator = PipelineOrchestrator::new(pipeline_config, llm).with_event_channel(tx);
    let handle = tokio::spawn(async move { orchestrator.run(&image).await });

    let mut progress = RunProgress::new(quiet || args.json);
    while let Some(event) = rx.recv().await {
        progress.handle_event(&event);
    }

    let outcome = match handle.await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => {
            progress.fail(&e.to_string());
            return Err(e);
        }
        Err(e) => {
            progress.fail("pipeline task aborted");
            return Err(InkcheckError::Internal(format!("Pipeline task failed: {}", e)));
        }
    };
    progress.finish();

    let output_dir = PathBuf::from(args.output.as_deref().unwrap_or(file_config.output_dir()));
    let written = write_deliverables(
        &output_dir,
        &outcome.export_record(),
        &outcome.metadata(),
        &outcome.table,
        &file_config.export_formats(),
    )
    .await?;

    if args.json {
        let out = json!({
            "run_id": outcome.run_id,
            "extracted_data": outcome.extracted,
            "validated_data": outcome.validated,
            "score": outcome.breakdown.total,
            "breakdown": outcome.breakdown,
            "rows": outcome.table,
            "files": written,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if quiet {
        println!("{}", outcome.breakdown.total);
        return Ok(());
    }

    println!("{}", render::text_card("Extracted Data", &outcome.extracted));
    println!("{}", render::text_card("Detailed Explanation & Corrections", &outcome.validated));
    println!("{}", render::score_card(&outcome.breakdown, true));
    println!("{}", render::comparison_card(&outcome.table));
    println!();
    for path in &written {
        println!("{} {}", style("wrote").dim(), path.display());
    }
    Ok(())
}

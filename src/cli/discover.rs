use std::path::PathBuf;
use console::style;
use tokio::sync::mpsc;
use tracing::info;
use crate::errors::EsgriskError;
use crate::nlp::{HeuristicEntityExtractor, LexiconAnalyzer};
use crate::pipeline::{AssessmentRequest, Pipeline};
use crate::reporting::{self, formatter, RunMetadata};
use super::commands::DiscoverArgs;
use super::progress;
use super::setup;

pub async fn handle_discover(args: DiscoverArgs) -> Result<(), EsgriskError> {
    let file_config = setup::load_file_config(&args.backend).await?;
    let weights = setup::resolve_weights(&args.weights, &file_config)?;
    let taxonomy = setup::build_taxonomy(&file_config)?;
    let search = setup::build_search_provider(&args.backend, &file_config)?;
    let extractor = setup::build_extractor(&args.backend, &file_config)?;

    let request = AssessmentRequest::for_material(&args.material, weights)?;
    info!(material = %args.material, weights = %weights, "Starting supplier discovery");

    let (tx, rx) = mpsc::unbounded_channel();
    let pipeline = Pipeline::new(
        search,
        extractor,
        Box::new(HeuristicEntityExtractor::new()),
        Box::new(LexiconAnalyzer),
        taxonomy,
    )
    .with_event_channel(tx);

    let bar = progress::batch_spinner();
    let renderer = progress::spawn_event_renderer(rx, bar.clone());
    let report = pipeline.discover_suppliers(&request).await;
    drop(pipeline); // closes the event channel so the renderer can finish
    let _ = renderer.await;
    bar.finish_and_clear();
    let report = report?;

    if args.backend.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", formatter::format_discovery_report(&report));
    }

    if let Some(output) = &args.backend.output {
        let metadata = RunMetadata::new(&report.query, report.weights);
        let body = formatter::format_discovery_report(&report);
        let path = reporting::write_report(&PathBuf::from(output), &metadata, &body).await?;
        println!("{}", style(format!("Report written to {}", path.display())).green());
    }

    Ok(())
}

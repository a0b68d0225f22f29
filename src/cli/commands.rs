//! Command handlers for Qualtrics Fetcher CLI
//!
//! Each handler resolves the instance configuration, builds a client, invokes
//! the matching API operation, and prints a human-readable summary.

use std::env;

use serde_json::Value;
use tracing::info;

use crate::api::{DownloadOutcome, QualtricsClient};
use crate::cli::{CheckArgs, DownloadArgs, ExportArgs};
use crate::config::QualtricsConfig;
use crate::errors::Result;

/// Resolve configuration from the environment and build a client
fn build_client() -> Result<QualtricsClient> {
    let config = QualtricsConfig::from_env()?;
    info!("Using Qualtrics instance {}", config.host());
    QualtricsClient::new(&config)
}

/// Render one catalog line per survey: id then name
fn survey_line(survey: &Value) -> String {
    let id = survey.get("id").and_then(Value::as_str).unwrap_or("<no id>");
    let name = survey
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>");
    format!("{:<24} {}", id, name)
}

/// Handle the list command
pub async fn handle_list() -> Result<()> {
    let client = build_client()?;
    let surveys = client.list_surveys().await?;
    info!("Retrieved {} surveys", surveys.len());

    if surveys.is_empty() {
        println!("No surveys available.");
        return Ok(());
    }

    println!("{} surveys:", surveys.len());
    for survey in &surveys {
        println!("{}", survey_line(survey));
    }
    Ok(())
}

/// Handle the export command
pub async fn handle_export(args: ExportArgs) -> Result<()> {
    let client = build_client()?;
    println!("Requesting export of {}...", args.survey_id);
    let progress_id = client.request_export(&args.survey_id).await?;
    println!("Progress ID: {}", progress_id);
    Ok(())
}

/// Handle the check command
pub async fn handle_check(args: CheckArgs) -> Result<()> {
    let client = build_client()?;
    println!(
        "Checking status of export {}/{}...",
        args.survey_id, args.progress_id
    );
    let progress = client
        .check_progress(&args.survey_id, &args.progress_id)
        .await?;

    match (&progress.file_id, progress.percent_complete) {
        (Some(file_id), _) => {
            println!("Export status: {} (file ID: {})", progress.status, file_id)
        }
        (None, Some(percent)) => println!("Export status: {} ({:.0}%)", progress.status, percent),
        (None, None) => println!("Export status: {}", progress.status),
    }
    Ok(())
}

/// Handle the download command
///
/// A not-yet-complete export is a warning, not an error: nothing is fetched
/// or written and the process still exits successfully.
pub async fn handle_download(args: DownloadArgs) -> Result<()> {
    let client = build_client()?;
    println!(
        "Checking, maybe downloading {}/{}...",
        args.survey_id, args.progress_id
    );

    let dest_dir = env::current_dir()?;
    let outcome = client
        .download_export(&args.survey_id, &args.progress_id, &dest_dir)
        .await?;

    match outcome {
        DownloadOutcome::Written { path, entries } => {
            println!("Export bundle entries: {:?}", entries);
            println!("Wrote survey data to {}", path.display());
        }
        DownloadOutcome::NotReady { status } => {
            println!(
                "Warning: export {}/{} not completed: {}",
                args.survey_id, args.progress_id, status
            );
        }
    }
    Ok(())
}

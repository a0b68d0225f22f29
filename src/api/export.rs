//! Export job lifecycle: request, progress probe, download
//!
//! An export is a server-side job. `request_export` starts it and hands back
//! a progress ID; `check_progress` is a single-shot status probe (callers
//! poll by invoking it again, there is no internal wait loop); and
//! `download_export` composes the probe with the file fetch and archive
//! extraction once the job reports complete.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use super::{archive, QualtricsClient};
use crate::constants::api;
use crate::errors::{ApiError, ApiResult, Result};

/// Status of one export job as reported by the progress endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportProgress {
    /// Free-form job status from the remote API (e.g. "inProgress",
    /// "complete", "failed"); not validated locally
    pub status: String,

    /// Identifier of the downloadable artifact; present once the job completes
    #[serde(default)]
    pub file_id: Option<String>,

    /// Completion percentage reported by the server, when available
    #[serde(default)]
    pub percent_complete: Option<f64>,
}

impl ExportProgress {
    /// Whether the job status indicates the export finished
    pub fn is_complete(&self) -> bool {
        self.status == api::STATUS_COMPLETE
    }
}

/// Result of a download attempt
#[derive(Debug)]
pub enum DownloadOutcome {
    /// The export was complete; the first archive entry was written to `path`
    Written {
        path: PathBuf,
        /// Names of every entry in the result bundle
        entries: Vec<String>,
    },
    /// The job has not finished; nothing was fetched or written
    NotReady { status: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportStarted {
    progress_id: String,
}

impl QualtricsClient {
    /// Starts an asynchronous response export for a survey
    ///
    /// POSTs the fixed `{"format":"ndjson"}` body to the survey's
    /// export-responses endpoint and returns the server-issued progress ID
    /// verbatim. The job runs on the remote system; this client keeps no
    /// record of it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx response, or a body
    /// without `result.progressId`.
    pub async fn request_export(&self, survey_id: &str) -> ApiResult<String> {
        let url = self.endpoint(&["surveys", survey_id, "export-responses"])?;
        let body = json!({ "format": api::EXPORT_FORMAT });
        let started: ExportStarted = self.post_result(url, &body).await?;
        info!(
            "Started export job {} for survey {}",
            started.progress_id, survey_id
        );
        Ok(started.progress_id)
    }

    /// Probes the status of an export job once
    ///
    /// `file_id` is `None` until the remote status indicates completion.
    /// This never waits: invoke repeatedly to poll.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx response, or a body
    /// without `result.status`.
    pub async fn check_progress(
        &self,
        survey_id: &str,
        progress_id: &str,
    ) -> ApiResult<ExportProgress> {
        let url = self.endpoint(&["surveys", survey_id, "export-responses", progress_id])?;
        let progress: ExportProgress = self.get_result(url).await?;
        debug!(
            "Export {}/{} status: {}",
            survey_id, progress_id, progress.status
        );
        Ok(progress)
    }

    /// Fetches the completed export's result bundle as bytes
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or non-2xx response.
    pub async fn fetch_export_file(&self, survey_id: &str, file_id: &str) -> ApiResult<Vec<u8>> {
        let url = self.endpoint(&["surveys", survey_id, "export-responses", file_id, "file"])?;
        self.get_bytes(url).await
    }

    /// Probes the job once and, if complete, downloads and extracts the result
    ///
    /// When the status is exactly `"complete"`, fetches the result bundle and
    /// extracts its first entry into `dest_dir` under the entry's own name.
    /// For any other status nothing further is fetched or written and the
    /// status is handed back in `DownloadOutcome::NotReady`.
    ///
    /// # Errors
    ///
    /// Returns an error on any API failure, on a complete job missing its
    /// `fileId`, or if the bundle is empty or cannot be extracted.
    pub async fn download_export(
        &self,
        survey_id: &str,
        progress_id: &str,
        dest_dir: &Path,
    ) -> Result<DownloadOutcome> {
        let progress = self.check_progress(survey_id, progress_id).await?;
        if !progress.is_complete() {
            warn!(
                "Export {}/{} not completed: {}",
                survey_id, progress_id, progress.status
            );
            return Ok(DownloadOutcome::NotReady {
                status: progress.status,
            });
        }

        let file_id = progress
            .file_id
            .ok_or(ApiError::MissingField { field: "fileId" })?;
        let bytes = self.fetch_export_file(survey_id, &file_id).await?;

        let entries = archive::list_entries(&bytes)?;
        info!("Export bundle entries: {:?}", entries);
        let path = archive::extract_first_entry(&bytes, dest_dir)?;
        info!("Wrote survey data to {}", path.display());

        Ok(DownloadOutcome::Written { path, entries })
    }
}

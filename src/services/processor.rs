use bon::Builder;
use futures_util::future::join_all;
use serde_json::Value;
use std::sync::Arc;
use strum::Display as StrumDisplay;
use tracing::{error, info, warn};

use crate::models::{ApiError, DirectoryPath, FileMetadata, FilePath, FileStats, Operation};
use crate::services::render::render_outcome;
use crate::sinks::OutputSlot;
use crate::traits::file_api::FileApi;
use crate::traits::output_sink::OutputSink;

/// User-level actions: the five file operations plus settings and stats.
#[derive(Debug, Clone, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    ListFiles,
    CheckFiles,
    ScanFiles(DirectoryPath),
    ProcessUnconverted,
    ProcessSingle(FilePath),
    ListSettings,
    UpdateSetting { name: String, value: String },
    Stats,
}

/// Runs actions against a `FileApi` and renders each outcome into the shared
/// slot and the configured sinks. The typed result is always handed back.
#[derive(Builder)]
pub struct FileProcessor {
    api: Arc<dyn FileApi>,
    #[builder(default)]
    slot: OutputSlot,
    #[builder(default)]
    sinks: Vec<Box<dyn OutputSink>>,
}

impl FileProcessor {
    pub fn slot(&self) -> &OutputSlot {
        &self.slot
    }

    pub async fn run(&self, action: Action) -> Result<Value, ApiError> {
        let outcome = self.execute(&action).await;
        match &outcome {
            Ok(_) => info!(action = %action, "action completed"),
            Err(e) => warn!(action = %action, kind = e.kind(), error = %e, "action failed"),
        }

        let text = render_outcome(&outcome);
        self.slot.set(text.as_str());
        for sink in &self.sinks {
            if let Err(e) = sink.write(&text).await {
                error!(sink = sink.name(), error = %e, "sink write failed");
            }
        }
        outcome
    }

    /// Starts every action at once. Results come back in input order, but
    /// the slot ends up holding whichever action finished last.
    pub async fn run_all(&self, actions: Vec<Action>) -> Vec<Result<Value, ApiError>> {
        join_all(actions.into_iter().map(|a| self.run(a))).await
    }

    async fn execute(&self, action: &Action) -> Result<Value, ApiError> {
        match action {
            Action::ListFiles => self.api.list_files().await,
            Action::CheckFiles => self.api.check_files().await,
            Action::ScanFiles(dir) => self.api.scan_files(dir).await,
            Action::ProcessUnconverted => self.api.process_unconverted().await,
            Action::ProcessSingle(path) => self.api.process_single(path).await,
            Action::ListSettings => self.api.list_settings().await,
            Action::UpdateSetting { name, value } => self.api.update_setting(name, value).await,
            Action::Stats => {
                let listing = self.api.list_files().await?;
                let files: Vec<FileMetadata> = serde_json::from_value(listing).map_err(|source| ApiError::Parse {
                    operation: Operation::ListFiles,
                    status: None,
                    source,
                })?;
                serde_json::to_value(FileStats::from_files(&files)).map_err(|source| ApiError::Parse {
                    operation: Operation::ListFiles,
                    status: None,
                    source,
                })
            }
        }
    }
}

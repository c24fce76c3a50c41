use clap::{Parser, Subcommand};

use crate::models::EndpointVariant;
use crate::services::processor::Action;

/// fileproc - client for the media file-processing service
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML config file (skipped if the default one is missing)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Base URL of the API, e.g. http://localhost:8000
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Route spelling used by the backend
    #[arg(long, value_enum, global = true)]
    pub variant: Option<EndpointVariant>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every tracked file
    List,
    /// Re-check tracked files for deletion or size changes
    Check,
    /// Scan a directory on the server and register new files
    Scan { directory: String },
    /// Convert every file not yet converted
    Process,
    /// Convert one file by path
    ProcessSingle { file_path: String },
    /// Show server settings
    Settings,
    /// Update one server setting
    SetSetting { name: String, value: String },
    /// Summarise the file listing (counts and space saved)
    Stats,
    /// Interactive session reading commands from stdin
    Shell,
}

impl Command {
    /// The single action behind a one-shot command; `None` for the shell.
    pub fn action(&self) -> Option<Action> {
        let action = match self {
            Command::List => Action::ListFiles,
            Command::Check => Action::CheckFiles,
            Command::Scan { directory } => Action::ScanFiles(directory.as_str().into()),
            Command::Process => Action::ProcessUnconverted,
            Command::ProcessSingle { file_path } => Action::ProcessSingle(file_path.as_str().into()),
            Command::Settings => Action::ListSettings,
            Command::SetSetting { name, value } => Action::UpdateSetting { name: name.clone(), value: value.clone() },
            Command::Stats => Action::Stats,
            Command::Shell => return None,
        };
        Some(action)
    }
}

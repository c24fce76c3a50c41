pub mod cli;
pub mod models;
pub mod services;
pub mod sinks;
pub mod traits;

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use crate::cli::Args;
use crate::services::http_api::HttpFileApi;
use crate::services::processor::FileProcessor;
use crate::services::settings::{AppConfig, load_config};
use crate::services::shell::run_shell;
use crate::sinks::{ConsoleSink, FileSink, OutputSink};
use crate::traits::file_api::FileApi;

pub const DEFAULT_CONFIG_PATH: &str = "fileproc.yaml";

/// High-level entrypoint: load config, init logging, run the command.
/// Returns `false` when the action itself failed.
pub async fn run(args: Args) -> anyhow::Result<bool> {
    let cfg = load_app_config(args.config.as_deref())?
        .with_base_url_override(args.base_url.clone())
        .with_variant_override(args.variant);
    let _guard = init_logging(&cfg)?;

    match args.command.action() {
        Some(action) => {
            let processor = build_processor(&cfg, true)?;
            Ok(processor.run(action).await.is_ok())
        }
        None => {
            let processor = build_processor(&cfg, false)?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let summary = run_shell(&processor, stdin, tokio::io::stdout()).await?;
            Ok(summary.failed == 0)
        }
    }
}

/// An explicit path must exist; the default one is optional.
pub fn load_app_config(path: Option<&str>) -> anyhow::Result<AppConfig> {
    match path {
        Some(p) => load_config(p).map_err(|e| anyhow::anyhow!(e)).with_context(|| format!("Failed to load {}", p)),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH)
            .map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Failed to load {}", DEFAULT_CONFIG_PATH)),
        None => Ok(AppConfig::default()),
    }
}

/// Structured logging to stderr, or to daily-rotated files when a log
/// directory is configured. `RUST_LOG` wins over the configured level.
pub fn init_logging(cfg: &AppConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let level = cfg.logging.as_ref().and_then(|l| l.level.clone()).unwrap_or_else(|| "info".to_string());
    let log_spec = std::env::var("RUST_LOG").unwrap_or(level);
    let filter = tracing_subscriber::EnvFilter::try_new(&log_spec).with_context(|| format!("invalid log filter {:?}", log_spec))?;

    match cfg.logging.as_ref().and_then(|l| l.directory.as_ref()) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "fileproc.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
            Ok(Some(guard))
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact()
                .try_init();
            Ok(None)
        }
    }
}

/// Wires the HTTP client and the configured sinks. The shell prints the
/// slot itself, so it asks for no console sink.
pub fn build_processor(cfg: &AppConfig, with_console: bool) -> anyhow::Result<FileProcessor> {
    let api = HttpFileApi::builder()
        .base_url(cfg.api.base_url())
        .endpoints(cfg.api.endpoints())
        .strict_status(cfg.api.strict_status.unwrap_or(false))
        .build()
        .context("Failed to build API client")?;
    info!(base_url = %api.base_url(), variant = %cfg.api.variant, "api client ready");

    let mut sinks: Vec<Box<dyn OutputSink>> = Vec::new();
    let out = cfg.output.as_ref();
    if with_console && out.and_then(|o| o.console_enabled).unwrap_or(true) {
        sinks.push(Box::new(ConsoleSink { max_chars: out.and_then(|o| o.console_max_chars) }));
    }
    if let Some(o) = out.filter(|o| o.file_enabled.unwrap_or(false)) {
        let path = o.file_path.clone().context("output.file_path is required when output.file_enabled is true")?;
        sinks.push(Box::new(FileSink {
            path: path.into(),
            max_chars: o.file_max_chars,
            append: o.file_append.unwrap_or(false),
        }));
    }

    let api: Arc<dyn FileApi> = Arc::new(api);
    Ok(FileProcessor::builder().api(api).sinks(sinks).build())
}

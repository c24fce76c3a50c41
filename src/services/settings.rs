use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::{EndpointVariant, Endpoints, HttpVerb};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const BASE_URL_ENV: &str = "FILEPROC_API_URL";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    #[serde(default)]
    pub variant: EndpointVariant,
    pub strict_status: Option<bool>,
    pub paths: Option<PathOverrides>,
    pub process_method: Option<HttpVerb>,
    pub file_path_key: Option<String>,
}

// Individual route overrides on top of the selected variant
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PathOverrides {
    pub list: Option<String>,
    pub check: Option<String>,
    pub scan: Option<String>,
    pub process: Option<String>,
    pub process_single: Option<String>,
    pub settings: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub console_enabled: Option<bool>,
    pub console_max_chars: Option<usize>,
    pub file_enabled: Option<bool>,
    pub file_path: Option<String>,
    pub file_append: Option<bool>,
    pub file_max_chars: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: Option<String>,   // used when RUST_LOG is unset
    pub directory: Option<String>, // daily-rotated log files
}

impl ApiConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Route table for the selected variant with config overrides applied.
    pub fn endpoints(&self) -> Endpoints {
        let mut e = Endpoints::for_variant(self.variant);
        if let Some(p) = self.paths.as_ref() {
            let pairs = [
                (&p.list, &mut e.list),
                (&p.check, &mut e.check),
                (&p.scan, &mut e.scan),
                (&p.process, &mut e.process),
                (&p.process_single, &mut e.process_single),
                (&p.settings, &mut e.settings),
            ];
            for (over, slot) in pairs {
                if let Some(v) = over {
                    *slot = v.clone();
                }
            }
        }
        if let Some(m) = self.process_method {
            e.process_method = m;
        }
        if let Some(k) = self.file_path_key.as_ref() {
            e.file_path_key = k.clone();
        }
        e
    }
}

impl AppConfig {
    /// Applies the base URL precedence: explicit override, then the
    /// `FILEPROC_API_URL` environment variable, then the file value.
    pub fn with_base_url_override(mut self, flag: Option<String>) -> Self {
        let env = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        if let Some(url) = flag.or(env) {
            self.api.base_url = Some(url);
        }
        self
    }

    pub fn with_variant_override(mut self, variant: Option<EndpointVariant>) -> Self {
        if let Some(v) = variant {
            self.api.variant = v;
        }
        self
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, Box<dyn std::error::Error + Send + Sync>> {
    let content = fs::read_to_string(path)?;
    let cfg: AppConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

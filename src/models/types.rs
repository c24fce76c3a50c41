use derive_more::{AsRef, Display, From, FromStr, Into};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

/// Directory on the backend host that should be scanned for new files.
/// Sent verbatim: an empty string is a legal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From, Into, Display, AsRef, FromStr)]
#[from(String, &str)]
pub struct DirectoryPath(String);

impl DirectoryPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Path of a single file known to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From, Into, Display, AsRef, FromStr)]
#[from(String, &str)]
pub struct FilePath(String);

impl FilePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Remote operations exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    ListFiles,
    CheckFiles,
    ScanFiles,
    ProcessUnconverted,
    ProcessSingle,
    ListSettings,
    UpdateSetting,
}

/// The two spellings of the route table seen in the wild.
///
/// `Script` follows the backend route module (`/files/process`,
/// `/files/process/single`, `file_path`); `Component` follows the React
/// front end (`GET /files/process-unconverted`, `/files/process-single`,
/// `filePath`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, StrumDisplay, EnumString, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EndpointVariant {
    #[default]
    Script,
    Component,
}

/// HTTP verb of an endpoint, kept serializable for the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, StrumDisplay, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum HttpVerb {
    Get,
    Post,
}

impl From<HttpVerb> for Method {
    fn from(v: HttpVerb) -> Self {
        match v {
            HttpVerb::Get => Method::GET,
            HttpVerb::Post => Method::POST,
        }
    }
}

/// Single source of truth for paths, verbs and body key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub list: String,
    pub check: String,
    pub scan: String,
    pub process: String,
    pub process_method: HttpVerb,
    pub process_single: String,
    pub file_path_key: String,
    pub settings: String,
}

impl Endpoints {
    pub fn for_variant(variant: EndpointVariant) -> Self {
        let (process, process_method, process_single, file_path_key) = match variant {
            EndpointVariant::Script => ("/files/process", HttpVerb::Post, "/files/process/single", "file_path"),
            EndpointVariant::Component => ("/files/process-unconverted", HttpVerb::Get, "/files/process-single", "filePath"),
        };
        Self {
            list: "/files".to_string(),
            check: "/files/check".to_string(),
            scan: "/files/scan".to_string(),
            process: process.to_string(),
            process_method,
            process_single: process_single.to_string(),
            file_path_key: file_path_key.to_string(),
            settings: "/settings".to_string(),
        }
    }

    /// Verb and path for an operation.
    pub fn route(&self, op: Operation) -> (HttpVerb, &str) {
        match op {
            Operation::ListFiles => (HttpVerb::Get, &self.list),
            Operation::CheckFiles => (HttpVerb::Get, &self.check),
            Operation::ScanFiles => (HttpVerb::Post, &self.scan),
            Operation::ProcessUnconverted => (self.process_method, &self.process),
            Operation::ProcessSingle => (HttpVerb::Post, &self.process_single),
            Operation::ListSettings => (HttpVerb::Get, &self.settings),
            Operation::UpdateSetting => (HttpVerb::Post, &self.settings),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::for_variant(EndpointVariant::default())
    }
}

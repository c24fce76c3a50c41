use serde::{Deserialize, Serialize};

/// Metadata record the backend keeps for every tracked file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub file_id: String,
    pub file_name: String,
    pub file_path: String,
    pub initial_size: i64,
    pub current_size: i64,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub converted: bool,
    #[serde(default)]
    pub processed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

/// Acknowledgement body returned by the mutating routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Aggregate view over a file listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStats {
    pub total: usize,
    pub deleted: usize,
    pub converted: usize,
    pub processed: usize,
    pub initial_bytes: i64,
    pub current_bytes: i64,
    /// Negative when conversion grew the files.
    pub bytes_saved: i64,
    /// `None` when nothing has a recorded initial size.
    pub percent_saved: Option<f64>,
}

impl FileStats {
    pub fn from_files(files: &[FileMetadata]) -> Self {
        let initial_bytes: i64 = files.iter().map(|f| f.initial_size).sum();
        let current_bytes: i64 = files.iter().map(|f| f.current_size).sum();
        let bytes_saved = initial_bytes - current_bytes;
        let percent_saved = if initial_bytes == 0 {
            None
        } else {
            Some(bytes_saved as f64 / initial_bytes as f64 * 100.0)
        };
        Self {
            total: files.len(),
            deleted: files.iter().filter(|f| f.deleted).count(),
            converted: files.iter().filter(|f| f.converted).count(),
            processed: files.iter().filter(|f| f.processed).count(),
            initial_bytes,
            current_bytes,
            bytes_saved,
            percent_saved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn file(path: &str, initial: i64, current: i64, converted: bool) -> FileMetadata {
        FileMetadata {
            file_id: format!("id-{}", path),
            file_name: path.rsplit('/').next().unwrap_or(path).to_string(),
            file_path: path.to_string(),
            initial_size: initial,
            current_size: current,
            deleted: false,
            converted,
            processed: converted,
        }
    }

    #[test]
    fn stats_over_mixed_listing() {
        let files = vec![
            file("/media/a.mkv", 1000, 400, true),
            file("/media/b.mkv", 1000, 1000, false),
        ];
        let s = FileStats::from_files(&files);
        assert_eq!(s.total, 2);
        assert_eq!(s.converted, 1);
        assert_eq!(s.processed, 1);
        assert_eq!(s.deleted, 0);
        assert_eq!(s.bytes_saved, 600);
        assert_eq!(s.percent_saved, Some(30.0));
    }

    #[test]
    fn stats_over_empty_listing_has_no_percentage() {
        let s = FileStats::from_files(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.percent_saved, None);
    }

    #[test]
    fn metadata_flags_default_to_false() {
        let f: FileMetadata = serde_json::from_value(json!({
            "file_id": "x",
            "file_name": "a.mp4",
            "file_path": "/a.mp4",
            "initial_size": 10,
            "current_size": 10
        }))
        .unwrap();
        assert!(!f.deleted && !f.converted && !f.processed);
    }
}

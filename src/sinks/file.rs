use async_trait::async_trait;
use std::error::Error;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

use super::utils::apply_limit;
use crate::traits::output_sink::OutputSink;

/// Writes every rendered result to a file, either replacing the previous
/// one or appending to a running log.
pub struct FileSink {
    pub path: PathBuf,
    pub max_chars: Option<usize>,
    pub append: bool,
}

#[async_trait]
impl OutputSink for FileSink {
    fn name(&self) -> &str { "file" }
    async fn write(&self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let final_text = apply_limit(text, self.max_chars);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        if self.append {
            let mut f = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .await?;
            f.write_all(format!("{}\n", final_text).as_bytes()).await?;
            f.flush().await?;
        } else {
            tokio::fs::write(&self.path, format!("{}\n", final_text)).await?;
        }
        Ok(())
    }
}

use async_trait::async_trait;
use std::error::Error;

#[async_trait]
pub trait OutputSink: Send + Sync {
    fn name(&self) -> &str;
    async fn write(&self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}

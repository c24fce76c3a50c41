use async_trait::async_trait;
use std::error::Error;

use super::utils::apply_limit;
use crate::traits::output_sink::OutputSink;

pub struct ConsoleSink {
    pub max_chars: Option<usize>,
}

#[async_trait]
impl OutputSink for ConsoleSink {
    fn name(&self) -> &str { "console" }
    async fn write(&self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let final_text = apply_limit(text, self.max_chars);
        #[cfg(test)]
        {
            use super::utils::CONSOLE_TEST_SINK;
            CONSOLE_TEST_SINK.lock().unwrap().push(final_text.to_string());
        }
        #[cfg(not(test))]
        {
            println!("{}", final_text);
        }
        tracing::debug!(text_len = final_text.len(), "console sink output");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::utils::CONSOLE_TEST_SINK;

    #[tokio::test]
    async fn writes_trimmed_text() {
        let sink = ConsoleSink { max_chars: Some(3) };
        sink.write("{\"a\": 1}").await.unwrap();
        let captured = CONSOLE_TEST_SINK.lock().unwrap();
        assert!(captured.iter().any(|s| s == "{\"…"));
    }
}

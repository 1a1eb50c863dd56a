use super::Source;
use anyhow::Result;
use async_trait::async_trait;
use tokio::io::AsyncReadExt;

/// Standard input source
#[derive(Default)]
pub struct StdinReader;

impl StdinReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for StdinReader {
    async fn read_all(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        Ok(buf)
    }

    fn describe(&self) -> String {
        "<stdin>".to_string()
    }
}

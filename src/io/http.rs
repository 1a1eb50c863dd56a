use async_trait::async_trait;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::Source;
use anyhow::{bail, Result};

/// HTTP source for remote archives
///
/// The whole body is downloaded in a single request before parsing; the
/// declared file size in the archive header can only be checked against a
/// complete buffer.
pub struct HttpReader {
    client: Client,
    url: String,
    transferred_bytes: AtomicU64,
}

impl HttpReader {
    pub fn new(url: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            url,
            transferred_bytes: AtomicU64::new(0),
        })
    }

    /// Get total bytes transferred from network
    pub fn transferred_bytes(&self) -> u64 {
        self.transferred_bytes.load(Ordering::Relaxed)
    }

    pub fn is_http_url(input: &str) -> bool {
        input.starts_with("http://") || input.starts_with("https://")
    }
}

#[async_trait]
impl Source for HttpReader {
    async fn read_all(&self) -> Result<Vec<u8>> {
        // One request, no retry: a failed fetch is a failed run
        let resp = self.client.get(&self.url).send().await?;

        if !resp.status().is_success() {
            bail!("HTTP request failed with status: {}", resp.status());
        }

        let bytes = resp.bytes().await?;
        self.transferred_bytes
            .fetch_add(bytes.len() as u64, Ordering::Relaxed);

        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

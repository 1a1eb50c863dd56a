mod http;
mod local;
mod stdin;

pub use http::HttpReader;
pub use local::LocalFileReader;
pub use stdin::StdinReader;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for a data source that is read completely into memory
#[async_trait]
pub trait Source: Send + Sync {
    /// Read the whole source
    async fn read_all(&self) -> Result<Vec<u8>>;

    /// Short description for diagnostics
    fn describe(&self) -> String;
}

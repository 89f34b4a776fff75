use crate::error::SourceError;
use async_trait::async_trait;
use core_types::DailyRecord;
use std::path::PathBuf;

pub mod error;

/// Where raw price-history text comes from.
///
/// Fetching is the only asynchronous step of the pipeline. Implementations
/// must return the complete text before it is parsed; cancellation and
/// retries are left to the caller.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Returns the raw delimited text.
    async fn fetch_text(&self) -> Result<String, SourceError>;

    /// A short human-readable name for log lines.
    fn describe(&self) -> String;

    /// Fetches and parses in one step.
    async fn load_records(&self) -> Result<Vec<DailyRecord>, SourceError> {
        let text = self.fetch_text().await?;
        tracing::info!(source = %self.describe(), bytes = text.len(), "Fetched price history");
        Ok(parser::parse(&text)?)
    }
}

/// Reads a CSV export from the local file system.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl HistorySource for FileSource {
    async fn fetch_text(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Downloads a CSV export over HTTP(S).
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl HistorySource for HttpSource {
    async fn fetch_text(&self) -> Result<String, SourceError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

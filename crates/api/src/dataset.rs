// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sources of raw reservation CSV text.

use std::path::PathBuf;
use tracing::debug;

use crate::error::DatasetError;

/// Location of the published reservation dataset.
pub const DEFAULT_DATASET_URL: &str = "https://gist.githubusercontent.com/yonbergman/7a0b05d6420dada16b92885780567e60/raw/114aa2ffb1c680174f9757431e672b5df53237eb/data.csv";

/// Something that can produce the raw dataset text.
pub trait DatasetSource: Send + Sync {
    /// Retrieves the full CSV text.
    fn fetch(&self) -> impl Future<Output = Result<String, DatasetError>> + Send;

    /// Human-readable description of where the data comes from, for logs.
    fn describe(&self) -> String;
}

/// Fetches the dataset over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpDatasetSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDatasetSource {
    /// Creates a source for `url` with a default client.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Creates a source for `url` using an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The dataset URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpDatasetSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_URL)
    }
}

impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self) -> Result<String, DatasetError> {
        debug!(url = %self.url, "Fetching reservation dataset");
        let response: reqwest::Response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the dataset from a local file.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileDatasetSource {
    async fn fetch(&self) -> Result<String, DatasetError> {
        debug!(path = %self.path.display(), "Reading reservation dataset");
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DatasetError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves dataset text already held in memory.
#[derive(Debug, Clone)]
pub struct StaticDatasetSource {
    text: String,
}

impl StaticDatasetSource {
    /// Creates a source that always yields `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DatasetSource for StaticDatasetSource {
    async fn fetch(&self) -> Result<String, DatasetError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        String::from("in-memory dataset")
    }
}

/// A source chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyDatasetSource {
    /// Remote HTTP(S) dataset.
    Http(HttpDatasetSource),
    /// Local file.
    File(FileDatasetSource),
    /// In-memory text.
    Static(StaticDatasetSource),
}

impl DatasetSource for AnyDatasetSource {
    async fn fetch(&self) -> Result<String, DatasetError> {
        match self {
            Self::Http(source) => source.fetch().await,
            Self::File(source) => source.fetch().await,
            Self::Static(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.describe(),
            Self::File(source) => source.describe(),
            Self::Static(source) => source.describe(),
        }
    }
}

impl From<HttpDatasetSource> for AnyDatasetSource {
    fn from(source: HttpDatasetSource) -> Self {
        Self::Http(source)
    }
}

impl From<FileDatasetSource> for AnyDatasetSource {
    fn from(source: FileDatasetSource) -> Self {
        Self::File(source)
    }
}

impl From<StaticDatasetSource> for AnyDatasetSource {
    fn from(source: StaticDatasetSource) -> Self {
        Self::Static(source)
    }
}

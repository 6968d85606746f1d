use gloo::net::http::Request;
use jeopardy_core::{CategoryId, ClueSource};
use jeopardy_protocol::{ClueRecord, DecodeError, Endpoint, decode_clues};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] gloo::net::Error),
    #[error("{url} responded with status {status}")]
    Status { status: u16, url: String },
    #[error("Malformed response from {url}: {source}")]
    Decode { url: String, source: DecodeError },
}

/// Clue source backed by the trivia service's HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpClueSource {
    api_base: String,
}

impl HttpClueSource {
    pub(crate) fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    async fn fetch(&self, endpoint: Endpoint) -> Result<Vec<ClueRecord>, FetchError> {
        let url = endpoint.url(&self.api_base);
        log::debug!("GET {}", url);

        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url,
            });
        }

        let body = response.text().await?;
        let records = decode_clues(&body).map_err(|source| FetchError::Decode { url, source })?;
        log::trace!("{} clue records for {:?}", records.len(), endpoint);
        Ok(records)
    }
}

impl ClueSource for HttpClueSource {
    type Error = FetchError;

    async fn random_clues(&mut self, count: u8) -> Result<Vec<ClueRecord>, FetchError> {
        self.fetch(Endpoint::RandomBatch { count }).await
    }

    async fn category_clues(&mut self, id: CategoryId) -> Result<Vec<ClueRecord>, FetchError> {
        self.fetch(Endpoint::ByCategory { id }).await
    }
}

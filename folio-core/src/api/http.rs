//! HTTP backend for a running catalog service

use super::{ApiResult, BookApi, BookFetcher, BookUpdater};
use crate::config::ClientConfig;
use crate::error::{ApiError, FolioError, Result};
use crate::types::{Book, EditDraft};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Catalog API over HTTP
///
/// | operation     | request               |
/// |---------------|-----------------------|
/// | `list_books`  | `GET /books`          |
/// | `fetch_book`  | `GET /books/{isbn}`   |
/// | `update_book` | `PUT /books/{isbn}`   |
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    http: Client,
    base_url: Url,
    endpoint: String,
}

impl HttpBookApi {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FolioError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            endpoint: config.endpoint(),
        })
    }

    /// `{base}/books` or `{base}/books/{isbn}`, with the ISBN as one encoded segment
    fn books_url(&self, isbn: Option<&str>) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::Transport(format!("{} cannot be used as a base URL", self.endpoint))
            })?;
            segments.pop_if_empty().push("books");
            if let Some(isbn) = isbn {
                segments.push(isbn);
            }
        }
        Ok(url)
    }

    fn map_transport(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unreachable {
                endpoint: self.endpoint.clone(),
                reason: err.to_string(),
            }
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(err.to_string())
        }
    }

    /// Reject 404 and other non-success statuses
    fn check_status(response: Response, isbn: Option<&str>) -> ApiResult<Response> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(isbn.unwrap_or_default().to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, isbn: Option<&str>) -> ApiResult<T> {
        let url = self.books_url(isbn)?;
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;
        let response = Self::check_status(response, isbn)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport(e))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl BookFetcher for HttpBookApi {
    async fn fetch_book(&self, isbn: &str) -> ApiResult<Book> {
        self.get_json(Some(isbn)).await
    }
}

#[async_trait]
impl BookUpdater for HttpBookApi {
    async fn update_book(&self, isbn: &str, draft: &EditDraft) -> ApiResult<()> {
        let url = self.books_url(Some(isbn))?;
        tracing::debug!("PUT {}", url);

        let response = self
            .http
            .put(url)
            .json(draft)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;
        Self::check_status(response, Some(isbn))?;
        Ok(())
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn list_books(&self) -> ApiResult<Vec<Book>> {
        self.get_json(None).await
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpBookApi {
        HttpBookApi::new(&ClientConfig::new(base).unwrap()).unwrap()
    }

    #[test]
    fn test_books_url() {
        let api = api("http://localhost:4730");
        assert_eq!(
            api.books_url(None).unwrap().as_str(),
            "http://localhost:4730/books"
        );
        assert_eq!(
            api.books_url(Some("978-0441013593")).unwrap().as_str(),
            "http://localhost:4730/books/978-0441013593"
        );
    }

    #[test]
    fn test_books_url_keeps_base_path_and_encodes_isbn() {
        let api = api("http://example.com/api/");
        assert_eq!(
            api.books_url(Some("a/b c")).unwrap().as_str(),
            "http://example.com/api/books/a%2Fb%20c"
        );
    }
}

//! Catalog API abstraction
//!
//! Screens only see the [`BookFetcher`] and [`BookUpdater`] traits. The HTTP
//! backend talks to a running catalog service; the memory backend serves tests
//! and offline demos.

mod http;
mod memory;

pub use http::HttpBookApi;
pub use memory::MemoryBookApi;

use crate::error::ApiError;
use crate::types::{Book, EditDraft};
use async_trait::async_trait;

/// Result type for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Reads a single book
#[async_trait]
pub trait BookFetcher: Send + Sync {
    /// Fetch the book with the given ISBN
    async fn fetch_book(&self, isbn: &str) -> ApiResult<Book>;
}

/// Writes the editable fields of a book
#[async_trait]
pub trait BookUpdater: Send + Sync {
    /// Replace the editable fields of the book with the given ISBN
    async fn update_book(&self, isbn: &str, draft: &EditDraft) -> ApiResult<()>;
}

/// The full catalog API
#[async_trait]
pub trait BookApi: BookFetcher + BookUpdater {
    /// List every book in the catalog
    async fn list_books(&self) -> ApiResult<Vec<Book>>;

    /// Base URL shown in "unreachable" messages
    fn endpoint(&self) -> String;
}

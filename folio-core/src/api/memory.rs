//! In-memory catalog (for testing and offline use)

use super::{ApiResult, BookApi, BookFetcher, BookUpdater};
use crate::config::DEFAULT_API_URL;
use crate::error::ApiError;
use crate::types::{Book, EditDraft};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// In-memory catalog with failure and latency injection
pub struct MemoryBookApi {
    books: RwLock<BTreeMap<String, Book>>,
    failures: RwLock<HashMap<String, ApiError>>,
    delays: RwLock<HashMap<String, Duration>>,
    offline: RwLock<bool>,
    updates: RwLock<Vec<(String, EditDraft)>>,
    fetches: RwLock<Vec<String>>,
    endpoint: String,
}

impl Default for MemoryBookApi {
    fn default() -> Self {
        Self {
            books: RwLock::default(),
            failures: RwLock::default(),
            delays: RwLock::default(),
            offline: RwLock::new(false),
            updates: RwLock::default(),
            fetches: RwLock::default(),
            endpoint: DEFAULT_API_URL.to_string(),
        }
    }
}

impl MemoryBookApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the given books
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let api = Self::new();
        for book in books {
            api.insert(book);
        }
        api
    }

    /// Add or replace a book
    pub fn insert(&self, book: Book) {
        write(&self.books).insert(book.isbn.clone(), book);
    }

    /// Current stored copy of a book
    pub fn get(&self, isbn: &str) -> Option<Book> {
        read(&self.books).get(isbn).cloned()
    }

    /// Make every request touching `isbn` fail with `error`
    pub fn fail_with(&self, isbn: impl Into<String>, error: ApiError) {
        write(&self.failures).insert(isbn.into(), error);
    }

    /// Remove an injected failure
    pub fn clear_failure(&self, isbn: &str) {
        write(&self.failures).remove(isbn);
    }

    /// Delay every request touching `isbn`
    pub fn delay(&self, isbn: impl Into<String>, delay: Duration) {
        write(&self.delays).insert(isbn.into(), delay);
    }

    /// Simulate a backend that refuses connections
    pub fn set_offline(&self, offline: bool) {
        *write(&self.offline) = offline;
    }

    /// Every update received, in order
    pub fn updates(&self) -> Vec<(String, EditDraft)> {
        read(&self.updates).clone()
    }

    /// Every ISBN fetched, in order
    pub fn fetches(&self) -> Vec<String> {
        read(&self.fetches).clone()
    }

    async fn gate(&self, isbn: &str) -> ApiResult<()> {
        let delay = read(&self.delays).get(isbn).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if *read(&self.offline) {
            return Err(ApiError::Unreachable {
                endpoint: self.endpoint.clone(),
                reason: "connection refused".to_string(),
            });
        }

        match read(&self.failures).get(isbn) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BookFetcher for MemoryBookApi {
    async fn fetch_book(&self, isbn: &str) -> ApiResult<Book> {
        write(&self.fetches).push(isbn.to_string());
        self.gate(isbn).await?;
        self.get(isbn)
            .ok_or_else(|| ApiError::NotFound(isbn.to_string()))
    }
}

#[async_trait]
impl BookUpdater for MemoryBookApi {
    async fn update_book(&self, isbn: &str, draft: &EditDraft) -> ApiResult<()> {
        write(&self.updates).push((isbn.to_string(), draft.clone()));
        self.gate(isbn).await?;

        let mut books = write(&self.books);
        let book = books
            .get_mut(isbn)
            .ok_or_else(|| ApiError::NotFound(isbn.to_string()))?;
        apply_draft(book, draft);
        Ok(())
    }
}

#[async_trait]
impl BookApi for MemoryBookApi {
    async fn list_books(&self) -> ApiResult<Vec<Book>> {
        if *read(&self.offline) {
            return Err(ApiError::Unreachable {
                endpoint: self.endpoint.clone(),
                reason: "connection refused".to_string(),
            });
        }
        Ok(read(&self.books).values().cloned().collect())
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }
}

fn apply_draft(book: &mut Book, draft: &EditDraft) {
    fn optional(value: &str) -> Option<String> {
        (!value.is_empty()).then(|| value.to_string())
    }

    book.title = draft.title.clone();
    book.subtitle = optional(&draft.subtitle);
    book.author = draft.author.clone();
    book.publisher = optional(&draft.publisher);
    book.num_pages = draft.num_pages;
    book.price = draft.price.clone();
    book.cover = optional(&draft.cover);
    book.description = optional(&draft.description);
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_api() {
        let api = MemoryBookApi::with_books([Book::new("1", "Dune", "Frank Herbert")]);

        // Fetch
        let book = api.fetch_book("1").await.unwrap();
        assert_eq!(book.title, "Dune");

        // Missing
        assert_eq!(
            api.fetch_book("2").await,
            Err(ApiError::NotFound("2".to_string()))
        );

        // Update
        let mut draft = EditDraft::from_book(&book);
        draft.title = "Dune Messiah".to_string();
        api.update_book("1", &draft).await.unwrap();
        assert_eq!(api.get("1").unwrap().title, "Dune Messiah");
        assert_eq!(api.updates().len(), 1);
        assert_eq!(api.fetches(), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let api = MemoryBookApi::with_books([Book::new("1", "Dune", "Frank Herbert")]);

        api.fail_with("1", ApiError::Status(500));
        assert_eq!(api.fetch_book("1").await, Err(ApiError::Status(500)));
        api.clear_failure("1");
        assert!(api.fetch_book("1").await.is_ok());

        api.set_offline(true);
        assert!(matches!(
            api.fetch_book("1").await,
            Err(ApiError::Unreachable { .. })
        ));
        assert!(api.list_books().await.is_err());
    }
}

//! Three-phase view state and the fetch lifecycle behind it

use crate::api::{ApiResult, BookFetcher};
use crate::error::ScreenError;
use crate::route::RouteParams;
use crate::types::Book;

/// What a read screen shows. Exactly one phase holds at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Waiting for the fetch to resolve
    Loading,

    /// The fetch failed, or there was nothing to fetch
    Error(ScreenError),

    /// The book is available
    Ready(Book),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    pub fn error(&self) -> Option<&ScreenError> {
        match self {
            ViewState::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn book(&self) -> Option<&Book> {
        match self {
            ViewState::Ready(book) => Some(book),
            _ => None,
        }
    }
}

/// Permission to resolve one fetch for one navigation.
///
/// Tickets are not `Clone`, so each fetch resolves a screen at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    isbn: String,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Perform the fetch this ticket was issued for
    pub async fn run(self, fetcher: &dyn BookFetcher) -> FetchCompletion {
        let result = fetcher.fetch_book(&self.isbn).await;
        FetchCompletion {
            ticket: self,
            result,
        }
    }
}

/// A resolved fetch, ready to be delivered to its screen
#[derive(Debug)]
pub struct FetchCompletion {
    pub ticket: FetchTicket,
    pub result: ApiResult<Book>,
}

/// Fetch-on-entry lifecycle shared by the detail and edit screens.
///
/// Every navigation bumps `generation`; only a completion carrying the
/// current generation is applied. Deactivation bumps it too, so nothing
/// resolves a screen after it has been torn down.
#[derive(Debug)]
pub struct FetchLifecycle {
    state: ViewState,
    generation: u64,
    isbn: Option<String>,
    active: bool,
}

impl Default for FetchLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchLifecycle {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            generation: 0,
            isbn: None,
            active: true,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// ISBN requested by the current navigation
    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a navigation. Returns the fetch to perform, if any.
    pub fn navigate(&mut self, params: &RouteParams) -> Option<FetchTicket> {
        self.generation += 1;
        self.active = true;

        match params.isbn() {
            Some(isbn) => {
                tracing::debug!(generation = self.generation, "loading book {}", isbn);
                self.isbn = Some(isbn.to_string());
                self.state = ViewState::Loading;
                Some(FetchTicket {
                    generation: self.generation,
                    isbn: isbn.to_string(),
                })
            }
            None => {
                tracing::warn!("navigation without an ISBN parameter");
                self.isbn = None;
                self.state = ViewState::Error(ScreenError::MissingIdentifier);
                None
            }
        }
    }

    /// Whether a completion for `generation` would still be applied
    pub fn is_current(&self, generation: u64) -> bool {
        self.active && generation == self.generation
    }

    /// Apply a fetch result. Returns `false` if it was stale and discarded.
    pub fn resolve(&mut self, completion: FetchCompletion) -> bool {
        let FetchCompletion { ticket, result } = completion;
        if !self.is_current(ticket.generation) {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "discarding stale fetch for {}",
                ticket.isbn
            );
            return false;
        }

        self.state = match result {
            Ok(book) => ViewState::Ready(book),
            Err(err) => {
                tracing::error!("Error fetching book {}: {}", ticket.isbn, err);
                ViewState::Error(ScreenError::from_fetch(&err))
            }
        };
        true
    }

    /// Tear down the screen; later completions are discarded
    pub fn deactivate(&mut self) {
        self.active = false;
        self.generation += 1;
    }
}

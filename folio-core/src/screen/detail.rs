//! Read-only book detail screen

use super::state::{FetchCompletion, FetchLifecycle, FetchTicket, ViewState};
use crate::api::BookFetcher;
use crate::route::RouteParams;

/// Controller behind `/books/:isbn`
///
/// Drive it either with [`DetailController::load`], or event by event with
/// [`DetailController::navigate`] and [`DetailController::complete`] when
/// fetches run elsewhere.
#[derive(Debug, Default)]
pub struct DetailController {
    lifecycle: FetchLifecycle,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        self.lifecycle.state()
    }

    /// ISBN of the current navigation
    pub fn isbn(&self) -> Option<&str> {
        self.lifecycle.isbn()
    }

    /// Route parameters changed (or the screen was entered)
    pub fn navigate(&mut self, params: &RouteParams) -> Option<FetchTicket> {
        self.lifecycle.navigate(params)
    }

    /// Deliver a fetch result. Returns `false` if it was stale.
    pub fn complete(&mut self, completion: FetchCompletion) -> bool {
        self.lifecycle.resolve(completion)
    }

    /// Navigate and wait for the fetch in one step
    pub async fn load(&mut self, params: &RouteParams, fetcher: &dyn BookFetcher) -> &ViewState {
        if let Some(ticket) = self.navigate(params) {
            let completion = ticket.run(fetcher).await;
            self.complete(completion);
        }
        self.state()
    }

    /// The screen was unmounted
    pub fn deactivate(&mut self) {
        self.lifecycle.deactivate();
    }
}

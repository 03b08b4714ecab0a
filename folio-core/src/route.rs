//! Route table and navigation boundary

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Name of the route parameter carrying the ISBN
pub const ISBN_PARAM: &str = "isbn";

/// A screen the application can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    BookList,

    /// `/books/:isbn`
    BookDetail { isbn: String },

    /// `/books/:isbn/edit`
    BookEdit { isbn: String },
}

impl Route {
    pub fn detail(isbn: impl Into<String>) -> Self {
        Route::BookDetail { isbn: isbn.into() }
    }

    pub fn edit(isbn: impl Into<String>) -> Self {
        Route::BookEdit { isbn: isbn.into() }
    }

    /// Resolve a path. Anything unrecognized redirects to the book list.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Route::BookList;
        }
        // Inner empty segments stay, so `/books//edit` has an empty ISBN
        let segments: Vec<&str> = path.split('/').collect();

        match segments.as_slice() {
            ["books", isbn] => Route::BookDetail {
                isbn: decode_segment(isbn),
            },
            ["books", isbn, "edit"] => Route::BookEdit {
                isbn: decode_segment(isbn),
            },
            _ => Route::BookList,
        }
    }

    /// Path for this route, with the ISBN percent-encoded
    pub fn path(&self) -> String {
        match self {
            Route::BookList => "/".to_string(),
            Route::BookDetail { isbn } => format!("/books/{}", urlencoding::encode(isbn)),
            Route::BookEdit { isbn } => format!("/books/{}/edit", urlencoding::encode(isbn)),
        }
    }

    /// Parameters a screen reads on activation
    pub fn params(&self) -> RouteParams {
        match self {
            Route::BookList => RouteParams::default(),
            Route::BookDetail { isbn } | Route::BookEdit { isbn } => {
                RouteParams::default().with(ISBN_PARAM, isbn.clone())
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Path parameters of the active route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: HashMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Parameter value. Empty values count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// The ISBN parameter
    pub fn isbn(&self) -> Option<&str> {
        self.get(ISBN_PARAM)
    }
}

/// Requests navigation on behalf of a screen
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that only remembers what it was asked to do
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every navigation requested, in order
    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent navigation
    pub fn last(&self) -> Option<Route> {
        self.routes().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!("navigate to {}", route);
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

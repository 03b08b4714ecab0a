//! Open command implementation

use super::{edit, list, show};
use anyhow::Result;
use folio_core::route::Route;
use folio_core::BookApi;

/// Resolve a route path and render the matching screen
pub async fn open<A: BookApi>(api: &A, path: &str, json: bool) -> Result<()> {
    let route = Route::parse(path);
    if route == Route::BookList && !path.trim_matches('/').is_empty() {
        tracing::info!("No screen at {}, showing the book list", path);
    }

    match route {
        Route::BookList => list(api, json).await,
        Route::BookDetail { isbn } => show(api, &isbn, json).await,
        Route::BookEdit { isbn } => edit(api, &isbn, &[], false).await,
    }
}

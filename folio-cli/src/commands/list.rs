//! List command implementation

use super::spinner;
use crate::render;
use anyhow::{bail, Result};
use folio_core::error::{FailureKind, ScreenError};
use folio_core::BookApi;

/// Render the book list
pub async fn list<A: BookApi>(api: &A, json: bool) -> Result<()> {
    let pb = spinner("Loading books...")?;
    let result = api.list_books().await;
    pb.finish_and_clear();

    let mut books = match result {
        Ok(books) => books,
        Err(err) => {
            tracing::error!("Error loading books: {}", err);
            match err.kind() {
                FailureKind::NetworkUnreachable => bail!("{}", ScreenError::from_fetch(&err)),
                FailureKind::NotFound | FailureKind::Other => {
                    bail!("Failed to load books. Please try again later.")
                }
            }
        }
    };
    books.sort_by(|a, b| a.title.cmp(&b.title));

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else if books.is_empty() {
        println!("No books in the catalog");
    } else {
        print!("{}", render::list(&books));
    }

    Ok(())
}

//! Show command implementation

use super::spinner;
use crate::render;
use anyhow::{bail, Result};
use folio_core::route::Route;
use folio_core::screen::{DetailController, ViewState};
use folio_core::BookApi;

/// Render the detail screen for one book
pub async fn show<A: BookApi>(api: &A, isbn: &str, json: bool) -> Result<()> {
    let mut detail = DetailController::new();

    let pb = spinner("Loading book details...")?;
    let state = detail.load(&Route::detail(isbn).params(), api).await;
    pb.finish_and_clear();

    match state {
        ViewState::Ready(book) => {
            if json {
                println!("{}", serde_json::to_string_pretty(book)?);
            } else {
                print!("{}", render::detail(book));
            }
            Ok(())
        }
        ViewState::Error(err) => {
            eprintln!("Please try searching for another book or return to the book list (folio list).");
            bail!("{}", err)
        }
        ViewState::Loading => bail!("Book details are still loading"),
    }
}

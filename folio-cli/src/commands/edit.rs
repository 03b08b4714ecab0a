//! Edit command implementation

use super::{show, spinner, ConsoleNotifier};
use crate::render;
use anyhow::{bail, Context, Result};
use folio_core::route::{RecordingNavigator, Route};
use folio_core::screen::{EditController, SubmitOutcome};
use folio_core::types::Field;
use folio_core::BookApi;
use std::sync::Arc;

/// Load the edit screen, apply field assignments and save them
pub async fn edit<A: BookApi>(
    api: &A,
    isbn: &str,
    assignments: &[(Field, String)],
    touch_all: bool,
) -> Result<()> {
    let navigator = Arc::new(RecordingNavigator::new());
    let mut controller = EditController::new(Arc::new(ConsoleNotifier), navigator.clone());

    let pb = spinner("Loading book details...")?;
    controller.load(&Route::edit(isbn).params(), api).await;
    pb.finish_and_clear();

    if let Some(err) = controller.state().error() {
        eprintln!("Please try again or return to the book (folio show {}).", isbn);
        bail!("{}", err);
    }

    for (field, value) in assignments {
        controller
            .set_field(*field, value)
            .with_context(|| format!("Cannot set {}", field))?;
        controller.touch(*field);
    }
    if touch_all {
        controller.touch_all();
    }

    if !controller.is_valid() {
        print!("{}", render::form(&controller));
        let invalid = controller.validation().invalid_fields().count();
        bail!("Not saved: {} invalid field(s)", invalid);
    }

    if assignments.is_empty() {
        print!("{}", render::form(&controller));
        println!("Nothing to save; pass --set field=value to change a field");
        return Ok(());
    }

    let pb = spinner("Saving...")?;
    let outcome = controller.submit(api).await;
    pb.finish_and_clear();

    match outcome {
        SubmitOutcome::Saved { .. } => match navigator.last() {
            Some(Route::BookDetail { isbn }) => show(api, &isbn, false).await,
            _ => Ok(()),
        },
        SubmitOutcome::Failed(err) => bail!("{}", err),
        SubmitOutcome::Blocked(reason) => bail!("Not saved: {}", reason),
        SubmitOutcome::Discarded => bail!("Not saved: the screen was closed"),
    }
}

//! Plain-text rendering of the screens

use folio_core::screen::{EditController, Rule};
use folio_core::types::{Book, Field};
use std::fmt::Write;

/// One line per book
pub fn list(books: &[Book]) -> String {
    let width = books.iter().map(|b| b.isbn.len()).max().unwrap_or(0);
    let mut out = String::new();
    for book in books {
        let _ = writeln!(
            out,
            "{:<width$}  {} by {}",
            book.isbn,
            book.title,
            book.author,
            width = width
        );
    }
    out
}

/// The detail screen
pub fn detail(book: &Book) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", book.title);
    if let Some(subtitle) = book.subtitle.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "{}", subtitle);
    }
    let _ = writeln!(out, "by {}", book.author);
    let _ = writeln!(out);
    let _ = writeln!(out, "ISBN:        {}", book.isbn);
    let publisher = book.publisher.as_deref().unwrap_or_default();
    let _ = writeln!(out, "Publisher:   {}", publisher);
    let _ = writeln!(out, "Pages:       {}", book.num_pages);
    let _ = writeln!(out, "Price:       {} €", book.price);
    if let Some(user_id) = book.user_id {
        let _ = writeln!(out, "User ID:     {}", user_id);
    }
    let _ = writeln!(
        out,
        "Cover:       {}",
        book.cover_url().unwrap_or("No cover available")
    );

    if let Some(description) = book.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out);
        let _ = writeln!(out, "Description");
        let _ = writeln!(out, "{}", description);
    }
    out
}

/// The edit form with its current draft values and visible errors
pub fn form(controller: &EditController) -> String {
    let mut out = String::new();
    let Some(book) = controller.state().book() else {
        return out;
    };

    let _ = writeln!(out, "Edit Book: {}", book.title);
    let _ = writeln!(out);
    for field in Field::ALL {
        let marker = if Rule::for_field(field).required { "*" } else { " " };
        let _ = writeln!(
            out,
            "{:<18}{} {}",
            field.label(),
            marker,
            controller.draft().value(field)
        );
        if let Some(error) = controller.field_error(field) {
            let _ = writeln!(out, "{:<20}! {}", "", error);
        }
    }
    let _ = writeln!(out, "{:<18}  {}", "ISBN (read-only)", book.isbn);
    let _ = writeln!(out);
    let _ = writeln!(out, "[{}]", controller.submit_label());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::notify::RecordingNotifier;
    use folio_core::route::{RecordingNavigator, Route};
    use folio_core::screen::{FetchCompletion, FetchTicket};
    use std::sync::Arc;

    fn dune() -> Book {
        Book::new("978-0441013593", "Dune", "Frank Herbert")
            .with_publisher("Chilton")
            .with_num_pages(412)
            .with_price("9.99")
    }

    #[test]
    fn test_detail_without_cover() {
        let text = detail(&dune());
        assert!(text.starts_with("Dune\nby Frank Herbert\n"));
        assert!(text.contains("Pages:       412"));
        assert!(text.contains("No cover available"));
        assert!(!text.contains("Description"));
    }

    #[test]
    fn test_list_aligns_isbns() {
        let books = vec![dune(), Book::new("1", "Short", "Someone")];
        let text = list(&books);
        assert_eq!(
            text,
            "978-0441013593  Dune by Frank Herbert\n1               Short by Someone\n"
        );
    }

    #[test]
    fn test_form_shows_touched_errors() {
        let mut controller = EditController::new(
            Arc::new(RecordingNotifier::new()),
            Arc::new(RecordingNavigator::new()),
        );
        assert_eq!(form(&controller), "");

        let ticket: FetchTicket = controller
            .navigate(&Route::edit("978-0441013593").params())
            .unwrap();
        controller.complete(FetchCompletion {
            ticket,
            result: Ok(dune()),
        });
        controller.set_field(Field::Title, "").unwrap();
        controller.touch(Field::Title);

        let text = form(&controller);
        assert!(text.starts_with("Edit Book: Dune\n"));
        assert!(text.contains("! Title is required"));
        assert!(text.contains("ISBN (read-only)    978-0441013593"));
        assert!(text.ends_with("[Save Changes]\n"));
    }
}

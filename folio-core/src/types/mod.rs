//! Data model shared by the screens and the API client

mod book;
mod draft;

pub use book::Book;
pub use draft::{parse_assignment, EditDraft, Field};

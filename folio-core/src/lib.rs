//! Folio Core Library
//!
//! This crate provides the data model, the catalog API client and the screen
//! controllers for the Folio book catalog. Front ends render whatever state
//! the controllers expose and feed user input back into them.

pub mod api;
pub mod config;
pub mod error;
pub mod notify;
pub mod route;
pub mod screen;
pub mod types;

pub use api::{BookApi, BookFetcher, BookUpdater, HttpBookApi, MemoryBookApi};
pub use config::ClientConfig;
pub use error::{ApiError, FailureKind, FieldParseError, FolioError, Result, ScreenError};
pub use notify::{Notification, Notifier, RecordingNotifier};
pub use route::{Navigator, RecordingNavigator, Route, RouteParams};
pub use screen::{DetailController, EditController, SubmitOutcome, ViewState};
pub use types::{Book, EditDraft, Field};

//! Book edit screen

use super::state::{FetchCompletion, FetchLifecycle, FetchTicket, ViewState};
use super::validation::{FieldValidation, FormValidation};
use crate::api::{ApiResult, BookFetcher, BookUpdater};
use crate::error::{FieldParseError, ScreenError};
use crate::notify::{Notifier, ERROR_TOAST_DURATION};
use crate::route::{Navigator, Route, RouteParams};
use crate::types::{EditDraft, Field};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Shown after a successful save
pub const UPDATE_SUCCESS_MESSAGE: &str = "Book updated successfully!";

/// Shown when a save is attempted without a loaded book
pub const MISSING_ISBN_MESSAGE: &str = "Error: ISBN not found";

/// Why a submit did not reach the updater
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("form has invalid fields")]
    Invalid,

    #[error("a save is already in progress")]
    InFlight,

    #[error("no book is loaded")]
    MissingIdentifier,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The update succeeded and navigation to the detail screen was requested
    Saved { isbn: String },

    /// The update failed; the draft is untouched
    Failed(ScreenError),

    /// The updater was never called
    Blocked(SubmitBlocked),

    /// The screen moved on before the update resolved
    Discarded,
}

/// Permission to resolve one in-flight save
#[derive(Debug)]
pub struct SubmitTicket {
    generation: u64,
    isbn: String,
    draft: EditDraft,
}

impl SubmitTicket {
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// The exact field set being sent
    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    /// Perform the update this ticket was issued for
    pub async fn run(self, updater: &dyn BookUpdater) -> SubmitCompletion {
        let result = updater.update_book(&self.isbn, &self.draft).await;
        SubmitCompletion {
            ticket: self,
            result,
        }
    }
}

/// A resolved save, ready to be delivered to its screen
#[derive(Debug)]
pub struct SubmitCompletion {
    pub ticket: SubmitTicket,
    pub result: ApiResult<()>,
}

/// Controller behind `/books/:isbn/edit`
///
/// Owns the draft exclusively. Validation is recomputed on every mutation;
/// field errors only surface for touched fields.
pub struct EditController {
    lifecycle: FetchLifecycle,
    draft: EditDraft,
    validation: FormValidation,
    touched: BTreeSet<Field>,
    /// Generation of the in-flight save, if any
    submitting: Option<u64>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl fmt::Debug for EditController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditController")
            .field("state", self.lifecycle.state())
            .field("draft", &self.draft)
            .field("touched", &self.touched)
            .field("submitting", &self.submitting)
            .finish_non_exhaustive()
    }
}

impl EditController {
    pub fn new(notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        let draft = EditDraft::default();
        Self {
            lifecycle: FetchLifecycle::new(),
            validation: FormValidation::of(&draft),
            draft,
            touched: BTreeSet::new(),
            submitting: None,
            notifier,
            navigator,
        }
    }

    pub fn state(&self) -> &ViewState {
        self.lifecycle.state()
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    pub fn validation(&self) -> &FormValidation {
        &self.validation
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Whether the save button is enabled
    pub fn can_submit(&self) -> bool {
        self.state().is_ready() && self.is_valid() && !self.is_submitting()
    }

    /// Save button caption
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Saving..."
        } else {
            "Save Changes"
        }
    }

    /// Route parameters changed (or the screen was entered).
    /// The draft and touched state start over.
    pub fn navigate(&mut self, params: &RouteParams) -> Option<FetchTicket> {
        self.touched.clear();
        self.submitting = None;
        self.replace_draft(EditDraft::default());
        self.lifecycle.navigate(params)
    }

    /// Deliver a fetch result; a fresh book seeds the draft.
    /// Returns `false` if the result was stale.
    pub fn complete(&mut self, completion: FetchCompletion) -> bool {
        if !self.lifecycle.resolve(completion) {
            return false;
        }
        if let Some(book) = self.lifecycle.state().book() {
            let draft = EditDraft::from_book(book);
            self.replace_draft(draft);
        }
        true
    }

    /// Navigate and wait for the fetch in one step
    pub async fn load(&mut self, params: &RouteParams, fetcher: &dyn BookFetcher) -> &ViewState {
        if let Some(ticket) = self.navigate(params) {
            let completion = ticket.run(fetcher).await;
            self.complete(completion);
        }
        self.state()
    }

    /// Assign raw input to a field
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<(), FieldParseError> {
        let result = self.draft.set(field, raw);
        self.revalidate();
        result
    }

    /// Mutate the draft directly
    pub fn update_draft(&mut self, edit: impl FnOnce(&mut EditDraft)) {
        edit(&mut self.draft);
        self.revalidate();
    }

    /// The field lost focus
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Mark every field touched, surfacing all errors
    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Validation record for a field, regardless of touch state
    pub fn field_validation(&self, field: Field) -> FieldValidation {
        self.validation.field(field)
    }

    /// Whether a field should be rendered as invalid
    pub fn is_field_invalid(&self, field: Field) -> bool {
        self.is_touched(field) && !self.validation.field(field).is_valid()
    }

    /// Error text for a field, only once it has been touched
    pub fn field_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.validation.field(field).message(field)
    }

    /// Every visible field error, in form order
    pub fn field_errors(&self) -> Vec<(Field, String)> {
        Field::ALL
            .iter()
            .filter_map(|&field| self.field_error(field).map(|msg| (field, msg)))
            .collect()
    }

    /// Start a save. On success the caller runs the ticket and hands the
    /// completion to [`EditController::complete_submit`].
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitBlocked> {
        if !self.is_valid() {
            tracing::debug!("submit ignored, form is invalid");
            return Err(SubmitBlocked::Invalid);
        }
        if self.is_submitting() {
            tracing::debug!("submit ignored, save already in flight");
            return Err(SubmitBlocked::InFlight);
        }

        let isbn = match self.state().book() {
            Some(book) => book.isbn.clone(),
            None => {
                tracing::warn!("submit without a loaded book");
                self.notifier.show(MISSING_ISBN_MESSAGE, Some(ERROR_TOAST_DURATION));
                return Err(SubmitBlocked::MissingIdentifier);
            }
        };

        let generation = self.lifecycle.generation();
        self.submitting = Some(generation);
        Ok(SubmitTicket {
            generation,
            isbn,
            draft: self.draft.clone(),
        })
    }

    /// Deliver a save result
    pub fn complete_submit(&mut self, completion: SubmitCompletion) -> SubmitOutcome {
        let SubmitCompletion { ticket, result } = completion;
        if !self.lifecycle.is_current(ticket.generation)
            || self.submitting != Some(ticket.generation)
        {
            tracing::debug!("discarding stale save for {}", ticket.isbn);
            return SubmitOutcome::Discarded;
        }
        self.submitting = None;

        match result {
            Ok(()) => {
                tracing::info!("updated book {}", ticket.isbn);
                self.notifier.show(UPDATE_SUCCESS_MESSAGE, None);
                self.navigator.navigate(Route::detail(ticket.isbn.clone()));
                SubmitOutcome::Saved { isbn: ticket.isbn }
            }
            Err(err) => {
                tracing::error!("Error updating book {}: {}", ticket.isbn, err);
                let screen_error = ScreenError::from_update(&err);
                self.notifier
                    .show(&screen_error.message(), Some(ERROR_TOAST_DURATION));
                SubmitOutcome::Failed(screen_error)
            }
        }
    }

    /// Validate, send and resolve a save in one step
    pub async fn submit(&mut self, updater: &dyn BookUpdater) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(ticket) => {
                let completion = ticket.run(updater).await;
                self.complete_submit(completion)
            }
            Err(blocked) => SubmitOutcome::Blocked(blocked),
        }
    }

    /// The screen was unmounted; pending results are dropped
    pub fn deactivate(&mut self) {
        self.lifecycle.deactivate();
        self.submitting = None;
    }

    /// Leave the form without saving and go back to the book, or to the
    /// list when no ISBN was requested.
    pub fn cancel(&mut self) {
        let route = match self.lifecycle.isbn() {
            Some(isbn) => Route::detail(isbn),
            None => Route::BookList,
        };
        self.deactivate();
        self.touched.clear();
        self.replace_draft(EditDraft::default());
        self.navigator.navigate(route);
    }

    fn replace_draft(&mut self, draft: EditDraft) {
        self.draft = draft;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.validation = FormValidation::of(&self.draft);
    }
}

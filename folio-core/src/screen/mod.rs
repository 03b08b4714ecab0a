//! Screen controllers
//!
//! Each controller is a small state machine fed by discrete events: a route
//! change, a fetch completion, an update completion. Fetches and updates are
//! described by tickets so they can run anywhere and resolve in any order;
//! only the ticket from the latest navigation is applied.

mod detail;
mod edit;
mod state;
mod validation;

pub use detail::DetailController;
pub use edit::{
    EditController, SubmitBlocked, SubmitCompletion, SubmitOutcome, SubmitTicket,
    MISSING_ISBN_MESSAGE, UPDATE_SUCCESS_MESSAGE,
};
pub use state::{FetchCompletion, FetchLifecycle, FetchTicket, ViewState};
pub use validation::{FieldValidation, FormValidation, Rule};

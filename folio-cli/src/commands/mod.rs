//! CLI command implementations

mod edit;
mod list;
mod open;
mod show;

pub use edit::edit;
pub use list::list;
pub use open::open;
pub use show::show;

use anyhow::Result;
use folio_core::notify::Notifier;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a screen is loading or saving
fn spinner(message: &'static str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    Ok(pb)
}

/// Prints notifications as they arrive
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&self, message: &str, _duration: Option<Duration>) {
        println!("{}", message);
    }
}

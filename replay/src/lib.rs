//! Collaborators around the `eloboard` core: reading match schedules from
//! CSV, and writing the rated history and the ranking back to CSV.

mod error;
pub mod record;
mod table;

pub use error::Error;
pub use table::{read_annotated, read_matches, write_annotated, write_ranking};

use tracing_subscriber::EnvFilter;

/// Logs to stderr, so that stdout only carries CSV. Respects `RUST_LOG`,
/// defaulting to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

use std::{
    error::Error as StdError,
    io,
    io::{BufWriter, Write as _},
};

use clap::Parser as _;
use eloboard::{aggregate_with, FinalRatingPolicy};
use eloboard_replay::{init_logging, read_annotated, write_ranking};
use tracing::info;

/// Reads rated matches as written by `rate_matches` from stdin, and writes
/// the final ranking to stdout.
#[derive(clap::Parser)]
struct Opt {
    /// Match the final rating is taken from: `last-appearance` or
    /// `last-closed`.
    #[clap(long, default_value = "last-appearance")]
    final_rating: FinalRatingPolicy,
    /// Number of leading entries to log.
    #[clap(long, default_value = "10")]
    top: usize,
}

fn main() -> Result<(), Box<dyn StdError>> {
    init_logging();
    let opt = Opt::parse();

    let annotated = read_annotated(io::stdin().lock())?;
    let ranking = aggregate_with(&annotated, opt.final_rating);

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_ranking(&mut stdout, &ranking)?;
    stdout.flush()?;

    for (rank, entry) in ranking.entries().iter().take(opt.top).enumerate() {
        info!(
            "#{} {}: {:.1} ({}-{})",
            rank + 1,
            entry.competitor_id,
            f64::from(entry.final_rating),
            entry.wins,
            entry.losses
        );
    }

    Ok(())
}

use std::{
    error::Error as StdError,
    io,
    io::{BufWriter, Write as _},
};

use clap::Parser as _;
use eloboard::{OrderedMatches, RatingDifference, RatingEngine, RatingScalar, RatingSystem};
use eloboard_replay::{init_logging, read_matches, write_annotated};
use tracing::info;

/// Reads a match schedule as CSV from stdin, and writes every match with
/// the Elo ratings before and after it to stdout.
#[derive(clap::Parser)]
struct Opt {
    /// Rating of competitors that have not played yet.
    #[clap(long, default_value = "1500")]
    base_rating: f64,
    /// Maximum number of rating points exchanged per match.
    #[clap(long, default_value = "20")]
    k_factor: f64,
    /// Rating points added to the home side when computing expectations.
    #[clap(long, default_value = "60")]
    home_advantage: f64,
    /// Fail if the input is not sorted by scheduled time, instead of
    /// sorting it.
    #[clap(long)]
    require_sorted: bool,
}

fn main() -> Result<(), Box<dyn StdError>> {
    init_logging();
    let opt = Opt::parse();

    let rating_system = RatingSystem::builder()
        .base_rating(RatingScalar(opt.base_rating))
        .k_factor(opt.k_factor)
        .home_advantage(RatingDifference(opt.home_advantage))
        .build();

    let matches = read_matches(io::stdin().lock())?;
    let matches = if opt.require_sorted {
        OrderedMatches::new(matches)?
    } else {
        OrderedMatches::sorted(matches)
    };

    let mut engine = RatingEngine::new(rating_system);
    let annotated = engine.process(&matches)?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_annotated(&mut stdout, &annotated)?;
    stdout.flush()?;

    info!(
        matches = annotated.len(),
        rated = engine.rated(),
        competitors = engine.snapshot().len(),
        "done"
    );

    Ok(())
}

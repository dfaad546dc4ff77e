//! geodist CLI entry point

use anyhow::Context;
use geodist::config::Cli;
use geodist::distance::haversine_km;
use geodist::input::read_places;
use geodist::output::write_report;
use geodist::ranker::rank;
use geodist::sampler::Sampler;
use geodist::stats::Summary;
use geodist::Result;
use std::io;
use std::process::ExitCode;

// SIGINT keeps its default disposition, so an interrupted run exits with the
// shell-visible status 130 rather than the generic failure status below.
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;

    let table = read_places(&cli.path)?;

    let mut sampler = match cli.seed {
        Some(seed) => Sampler::with_seed(seed),
        None => Sampler::new(),
    };
    let subset = sampler.sample(&table.places, cli.number);

    let pairs = rank(&subset, haversine_km);
    let summary = Summary::from_pairs(&pairs)
        .with_context(|| format!("{} place(s) yield no pairs", subset.len()))?;

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &table.header, &pairs, &summary)?;
    Ok(())
}

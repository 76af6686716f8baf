/// qthresh - Optimal q-gram filtration threshold computation
///
/// Computes the minimum number of shape occurrences that any two strings
/// within a given error budget are guaranteed to share. An approximate-match
/// search may safely discard any candidate sharing fewer occurrences.
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use qthresh::engine::{compute_threshold, Algorithm, DistanceModel};
use qthresh::error::ThresholdError;
use qthresh::shape::Shape;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Q-gram shape: a run of '1's ("1111"), a '1'/'0' mask ("1100101"),
    /// or a contiguous span ("12")
    #[clap(value_name = "SHAPE")]
    shape: String,

    /// Text length
    #[clap(value_name = "LENGTH", value_parser = clap::value_parser!(u32).range(10..=100))]
    length: u32,

    /// Maximum number of errors
    #[clap(value_name = "ERRORS", value_parser = clap::value_parser!(u32).range(0..=10))]
    errors: u32,

    /// Algorithm to use
    #[clap(short = 'a', long = "algorithm", default_value = "lemma", value_parser = parse_algorithm)]
    algorithm: Algorithm,

    /// Use edit distance. Default: Hamming distance
    #[clap(short = 'e', long = "edit")]
    edit: bool,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e: ThresholdError| e.to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let shape = Shape::parse(&args.shape)?;
    let model = if args.edit {
        DistanceModel::Edit
    } else {
        DistanceModel::Hamming
    };

    let start = Instant::now();
    let threshold = compute_threshold(&shape, args.length, args.errors, model, args.algorithm)?;
    let elapsed = start.elapsed().as_secs_f64();

    println!("{threshold}\t{elapsed:.6}");

    Ok(())
}

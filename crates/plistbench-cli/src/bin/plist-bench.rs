//! Parse a property list file repeatedly to measure parser throughput

use clap::Parser;
use plistbench::{Backend, BenchError, BenchmarkDriver, IterationCount};
use plistbench_cli::{fail, init_logging, parse_args};

/// Parse a property list file repeatedly to measure parser throughput
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Increase logging
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    /// Parser to benchmark: xml, auto or serde
    #[clap(short, long, default_value = "xml")]
    backend: Backend,

    /// Reject iteration counts which are not plain non-negative integers
    #[clap(long)]
    strict: bool,

    /// Print a throughput summary when done
    #[clap(short, long)]
    timing: bool,

    /// Property list file
    filepath: String,

    /// Number of times to parse it
    #[clap(allow_hyphen_values = true)]
    times: String,
}

fn run(args: &Args) -> Result<(), BenchError> {
    let iterations = if args.strict {
        IterationCount::parse_strict(&args.times)?
    } else {
        IterationCount::parse_lax(&args.times)
    };
    let buffer = plistbench::load(&args.filepath)?;
    let parser = args.backend.parser();
    let stats = BenchmarkDriver::new(parser.as_ref())
        .run(&buffer, iterations)
        .into_result(&buffer)?;
    log::info!("{}: {}", args.filepath, stats);
    if args.timing {
        println!("{}", stats);
    }
    Ok(())
}

fn main() {
    let args: Args = parse_args();
    init_logging(args.verbose);
    if let Err(e) = run(&args) {
        fail(e)
    }
}

//! Compare the throughput of several property list parsers on one file

use clap::Parser;
use plistbench::{Backend, BenchError, ProfileReport, Profiler, StructuredParser};
use plistbench_cli::{fail, init_logging, parse_args};

/// Compare the throughput of several property list parsers on one file
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Increase logging
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    /// Untimed passes per parser before measuring
    #[clap(long, default_value_t = 5)]
    warmup: u32,

    /// Timed passes per parser
    #[clap(long, default_value_t = 20)]
    repeat: u32,

    /// Output as JSON
    #[clap(short, long)]
    json: bool,

    /// Parser to include; repeat to compare several. The first is the baseline
    #[clap(short, long)]
    backend: Vec<Backend>,

    /// Property list file
    filepath: String,
}

fn profile(args: &Args) -> Result<ProfileReport, BenchError> {
    let buffer = plistbench::load(&args.filepath)?;
    let backends = if args.backend.is_empty() {
        Backend::ALL.to_vec()
    } else {
        args.backend.clone()
    };
    let parsers: Vec<Box<dyn StructuredParser>> = backends.iter().map(|b| b.parser()).collect();
    let parsers: Vec<&dyn StructuredParser> = parsers.iter().map(|p| p.as_ref()).collect();
    Profiler {
        warmup: args.warmup,
        repeat: args.repeat,
    }
    .profile(&buffer, &parsers)
}

fn main() {
    let args: Args = parse_args();
    init_logging(args.verbose);
    let report = profile(&args).unwrap_or_else(|e| fail(e));
    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(e),
        }
    } else {
        print!("{}", report);
    }
}

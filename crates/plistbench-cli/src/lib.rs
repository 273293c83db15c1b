use clap::error::ErrorKind;
use plistbench::BenchError;
use std::fmt::Display;
use std::process;

/// Turn a clap failure into a [`BenchError::Usage`].
///
/// `--help` and `--version` are not failures; they print and exit here.
pub fn check_args<T>(parsed: Result<T, clap::Error>) -> Result<T, BenchError> {
    parsed.map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => BenchError::Usage(e.to_string()),
    })
}

/// Parse the command line; a bad one prints usage to stderr and exits with -1.
pub fn parse_args<T: clap::Parser>() -> T {
    check_args(T::try_parse()).unwrap_or_else(|e| fail(e))
}

pub fn init_logging(verbose: usize) {
    env_logger::init_from_env(env_logger::Env::default().filter_or(
        env_logger::DEFAULT_FILTER_ENV,
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        },
    ));
}

/// Report a fatal error on stderr and exit with -1.
pub fn fail(err: impl Display) -> ! {
    eprintln!("{}", err.to_string().trim_end());
    process::exit(-1)
}

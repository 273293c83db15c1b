//! Drive a property list parser over the same in-memory bytes, many times.
//!
//! The file is read once into a [`ByteBuffer`]; a [`BenchmarkDriver`] then
//! hands those bytes to a [`StructuredParser`] a fixed number of times,
//! throwing each result away, and stops at the first failure.

mod count;
mod driver;
mod error;
mod loader;
mod parser;
mod profile;

pub use crate::count::IterationCount;
pub use crate::driver::{BenchmarkDriver, DriverState, Outcome, RunStats};
pub use crate::error::{BenchError, LoadError, ParseFailure};
pub use crate::loader::{load, ByteBuffer};
pub use crate::parser::{
    AutoParser, Backend, SerdeParser, StructuredParser, StructuredValue, XmlParser,
};
pub use crate::profile::{ProfileEntry, ProfileReport, Profiler};

/// Load `path` and parse it `iterations` times with `parser`.
///
/// This is the whole harness in one call: a load failure or the first parse
/// failure is returned as an error, otherwise the run statistics.
pub fn bench_file(
    path: &str,
    iterations: IterationCount,
    parser: &dyn StructuredParser,
) -> Result<RunStats, BenchError> {
    let buffer = load(path)?;
    BenchmarkDriver::new(parser)
        .run(&buffer, iterations)
        .into_result(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bench_file_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0"><dict><key>item 1</key><string>Hello</string></dict></plist>"#)
            .unwrap();
        let path = file.path().to_str().unwrap();
        let stats = bench_file(path, IterationCount::new(3), &XmlParser).unwrap();
        assert_eq!(stats.iterations, 3);
    }

    #[test]
    fn bench_file_missing() {
        let err = bench_file("missing.plist", IterationCount::new(3), &XmlParser).unwrap_err();
        assert!(matches!(err, BenchError::Load(_)));
        assert!(err.to_string().contains("missing.plist"));
    }
}

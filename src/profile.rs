//! Compare several parsers against each other on the same buffer.
//!
//! Each parser gets some untimed warm-up passes, then a number of timed
//! passes whose times are summed. The first parser is the baseline and every
//! other parser's cost is reported relative to it.

use crate::count::IterationCount;
use crate::driver::BenchmarkDriver;
use crate::error::BenchError;
use crate::loader::ByteBuffer;
use crate::parser::StructuredParser;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profiler {
    pub warmup: u32,
    pub repeat: u32,
}

impl Default for Profiler {
    fn default() -> Self {
        Profiler {
            warmup: 5,
            repeat: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileEntry {
    pub name: String,
    pub secs_per_pass: f64,
    /// Time per pass relative to the baseline.
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub file: String,
    pub bytes: usize,
    pub warmup: u32,
    pub repeat: u32,
    pub entries: Vec<ProfileEntry>,
}

impl ProfileReport {
    fn new(buffer: &ByteBuffer, profiler: &Profiler) -> Self {
        ProfileReport {
            file: buffer.path().display().to_string(),
            bytes: buffer.len(),
            warmup: profiler.warmup,
            repeat: profiler.repeat,
            entries: vec![],
        }
    }

    pub fn baseline(&self) -> Option<&ProfileEntry> {
        self.entries.first()
    }

    /// Record `total` time spent over `self.repeat` passes.
    fn push(&mut self, name: &str, total: Duration) {
        let secs_per_pass = total.as_secs_f64() / f64::from(self.repeat.max(1));
        let cost = match self.baseline() {
            None => 1.0,
            Some(base) if base.secs_per_pass > 0.0 => secs_per_pass / base.secs_per_pass,
            Some(_) => 0.0,
        };
        self.entries.push(ProfileEntry {
            name: name.to_string(),
            secs_per_pass,
            cost,
        });
    }
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ix, entry) in self.entries.iter().enumerate() {
            if ix == 0 {
                writeln!(f, "{}: {:.6} sec/pass", entry.name, entry.secs_per_pass)?;
            } else {
                writeln!(
                    f,
                    "{}: {:.6} sec/pass, {:.2} costs",
                    entry.name, entry.secs_per_pass, entry.cost
                )?;
            }
        }
        Ok(())
    }
}

impl Profiler {
    pub fn profile(
        &self,
        buffer: &ByteBuffer,
        parsers: &[&dyn StructuredParser],
    ) -> Result<ProfileReport, BenchError> {
        if self.repeat == 0 {
            return Err(BenchError::InvalidCount("repeat must be at least 1".to_string()));
        }
        let mut report = ProfileReport::new(buffer, self);
        for parser in parsers {
            log::info!("Profiling {}", parser.name());
            BenchmarkDriver::new(*parser)
                .run(buffer, IterationCount::new(self.warmup.into()))
                .into_result(buffer)?;
            let mut total = Duration::ZERO;
            for _ in 0..self.repeat {
                total += BenchmarkDriver::new(*parser)
                    .run(buffer, IterationCount::new(1))
                    .into_result(buffer)?
                    .elapsed;
            }
            report.push(parser.name(), total);
        }
        Ok(report)
    }
}

use crate::count::IterationCount;
use crate::error::{BenchError, ParseFailure};
use crate::loader::ByteBuffer;
use crate::parser::StructuredParser;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// What a run managed before it stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    /// Parses that completed successfully.
    pub iterations: u64,
    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
    /// Size of the buffer handed to every parse.
    pub bytes: usize,
}

impl RunStats {
    pub fn per_iteration(&self) -> Option<Duration> {
        if self.iterations == 0 {
            return None;
        }
        Some(self.elapsed.div_f64(self.iterations as f64))
    }

    /// Bytes parsed per second, counting the buffer once per iteration.
    pub fn bytes_per_second(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        if self.iterations == 0 || secs == 0.0 {
            return None;
        }
        Some(self.bytes as f64 * self.iterations as f64 / secs)
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} iterations in {:.3?}", self.iterations, self.elapsed)?;
        if let Some(per) = self.per_iteration() {
            write!(f, ", {:.3?}/pass", per)?;
        }
        if let Some(rate) = self.bytes_per_second() {
            write!(f, ", {:.2} MB/s", rate / 1_000_000.0)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum Outcome {
    Succeeded(RunStats),
    Failed {
        /// One-based ordinal of the parse that failed.
        iteration: u64,
        requested: u64,
        failure: ParseFailure,
        stats: RunStats,
    },
}

impl Outcome {
    pub fn state(&self) -> DriverState {
        match self {
            Outcome::Succeeded(_) => DriverState::Succeeded,
            Outcome::Failed { .. } => DriverState::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }

    pub fn stats(&self) -> &RunStats {
        match self {
            Outcome::Succeeded(stats) => stats,
            Outcome::Failed { stats, .. } => stats,
        }
    }

    /// Turn a failed run into a [`BenchError::Parse`] naming the buffer's file.
    pub fn into_result(self, buffer: &ByteBuffer) -> Result<RunStats, BenchError> {
        match self {
            Outcome::Succeeded(stats) => Ok(stats),
            Outcome::Failed {
                iteration,
                requested,
                failure,
                ..
            } => Err(BenchError::Parse {
                path: buffer.path().to_path_buf(),
                iteration,
                iterations: requested,
                source: failure,
            }),
        }
    }
}

/// Parses one buffer over and over with one parser.
///
/// A driver is [`Idle`](DriverState::Idle) until it runs, and runs exactly
/// once: [`run`](Self::run) takes it by value and the final state is read
/// from the [`Outcome`].
pub struct BenchmarkDriver<'a, P: ?Sized> {
    parser: &'a P,
}

impl<'a, P: StructuredParser + ?Sized> BenchmarkDriver<'a, P> {
    pub fn new(parser: &'a P) -> Self {
        BenchmarkDriver { parser }
    }

    /// Parse `buffer` `iterations` times, stopping at the first failure.
    ///
    /// Every parse sees the same bytes; each result is dropped as soon as it
    /// has been checked.
    pub fn run(self, buffer: &ByteBuffer, iterations: IterationCount) -> Outcome {
        let requested = iterations.get();
        let bytes = buffer.as_bytes();
        log::debug!(
            "Parsing {} ({} bytes) {} times with {}",
            buffer.path().display(),
            bytes.len(),
            requested,
            self.parser.name()
        );
        log::trace!("Driver {:?} -> {:?}", DriverState::Idle, DriverState::Running);

        let start = Instant::now();
        for i in 0..requested {
            match self.parser.parse_structured_value(bytes) {
                Ok(value) => drop(black_box(value)),
                Err(failure) => {
                    let stats = RunStats {
                        iterations: i,
                        elapsed: start.elapsed(),
                        bytes: bytes.len(),
                    };
                    log::trace!(
                        "Driver {:?} -> {:?}",
                        DriverState::Running,
                        DriverState::Failed
                    );
                    log::debug!("Iteration {} of {} failed: {}", i + 1, requested, failure);
                    return Outcome::Failed {
                        iteration: i + 1,
                        requested,
                        failure,
                        stats,
                    };
                }
            }
        }
        let stats = RunStats {
            iterations: requested,
            elapsed: start.elapsed(),
            bytes: bytes.len(),
        };
        log::trace!("Driver {:?} -> {:?}", DriverState::Running, DriverState::Succeeded);
        log::debug!("Completed {} iterations in {:?}", requested, stats.elapsed);
        Outcome::Succeeded(stats)
    }
}

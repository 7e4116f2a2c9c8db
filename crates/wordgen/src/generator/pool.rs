use std::io::Write;
use std::thread;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Engine, Error, GenerationConfig, LockEmitter, Partition, Result};

/// Outcome of a completed run.
#[derive(Debug)]
pub struct Report<W> {
    lines: u64,
    sink: W,
}

impl<W> Report<W> {
    /// Total lines written across all workers.
    pub const fn lines(&self) -> u64 {
        self.lines
    }

    pub const fn sink(&self) -> &W {
        &self.sink
    }

    /// Returns the flushed writer.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

/// Enumerates every word described by `config` into `writer`, one per line.
///
/// Spawns exactly `config.num_threads()` scoped workers. Worker `i` walks the
/// first symbols at charset indices `i`, `i + n`, ... and worker 0 also owns
/// the empty word. All of them emit through one [`LockEmitter`], so the line
/// cap holds globally and lines never interleave mid-word. Lines from
/// different workers may appear in any order.
///
/// The writer is flushed once every worker has joined.
///
/// # Errors
///
/// - [`Error::Sink`] if writing or flushing failed. The first failure halts
///   every other worker and `written` reports the lines committed before it.
/// - [`Error::WorkerPanicked`] if a worker panicked.
/// - [`Error::Spawn`] if the OS refused to start a worker thread.
///
/// # Example
/// ```
/// use std::collections::HashSet;
/// use wordgen::{GenerationConfig, generate};
///
/// let config = GenerationConfig::builder("xy")
///     .min_len(2)
///     .max_len(2)
///     .num_threads(4)
///     .build()
///     .unwrap();
/// let report = generate(&config, Vec::new()).unwrap();
///
/// let out = String::from_utf8(report.into_sink()).unwrap();
/// let lines: HashSet<_> = out.lines().collect();
/// assert_eq!(lines, HashSet::from(["xx", "xy", "yx", "yy"]));
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip_all, fields(threads = config.num_threads()))
)]
pub fn generate<W>(config: &GenerationConfig, writer: W) -> Result<Report<W>>
where
    W: Write + Send,
{
    let emitter = LockEmitter::new(writer, config.max_lines());
    let outcome = run_workers(config, &emitter).and_then(|()| emitter.flush());

    let state = emitter.into_state();
    outcome?;
    let state = state?;

    let written = state.count;
    let sink = state.writer;

    #[cfg(feature = "tracing")]
    tracing::info!(lines = written, "generation complete");
    Ok(Report {
        lines: written,
        sink,
    })
}

/// Spawns one worker per partition and joins them all.
///
/// Returns the first error in worker order. A worker that merely observed a
/// halted run finishes with `Ok`, so the reported error is the one that
/// caused the halt.
fn run_workers<W>(config: &GenerationConfig, emitter: &LockEmitter<W>) -> Result<()>
where
    W: Write + Send,
{
    let workers = config.num_threads();

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(workers);
        let mut failure = None;

        for partition in Partition::all(workers) {
            let worker = partition.worker();
            let spawned = thread::Builder::new()
                .name(format!("wordgen-worker-{worker}"))
                .spawn_scoped(s, move || Engine::new(config, emitter).run(partition));

            match spawned {
                Ok(handle) => handles.push((worker, handle)),
                Err(source) => {
                    // Already-running workers must wind down before the scope
                    // can return.
                    emitter.halt()?;
                    failure = Some(Error::Spawn { worker, source });
                    break;
                }
            }
        }

        for (worker, handle) in handles {
            let result = handle
                .join()
                .map_err(|_| Error::WorkerPanicked { worker })
                .and_then(|result| result);

            match result {
                Ok(_lines) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(worker, lines = _lines, "worker joined");
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!(worker, "worker failed: {err}");
                    failure.get_or_insert(err);
                }
            }
        }

        failure.map_or(Ok(()), Err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_thread_output_is_pre_order() {
        let config = GenerationConfig::builder("ab")
            .min_len(1)
            .max_len(2)
            .build()
            .unwrap();
        let report = generate(&config, Vec::new()).unwrap();
        assert_eq!(report.lines(), 6);
        assert_eq!(report.sink(), b"a\naa\nab\nb\nba\nbb\n");
    }

    #[test]
    fn report_counts_match_sink() {
        let config = GenerationConfig::builder("abc")
            .min_len(0)
            .max_len(3)
            .num_threads(2)
            .build()
            .unwrap();
        let report = generate(&config, Vec::new()).unwrap();
        let lines = report.lines();
        let out = report.into_sink();
        assert_eq!(lines, 1 + 3 + 9 + 27);
        assert_eq!(out.iter().filter(|&&b| b == b'\n').count() as u64, lines);
    }
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wordgen::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, GenerationConfig};

/// Default output file, truncated at the start of every run.
pub const DEFAULT_OUTPUT: &str = "results.txt";

/// Command-line arguments for the `wordgen` binary.
///
/// Every option except `--verbose` can also come from the environment (or a
/// `.env` file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordgen",
    version,
    about = "Generate every word over a character set, one per line"
)]
pub struct CliArgs {
    /// Symbols to build words from, in enumeration order.
    ///
    /// Repeated symbols are kept and produce repeated lines.
    ///
    /// Environment variable: `WORDGEN_CHARSET`
    #[arg(short, long, env = "WORDGEN_CHARSET")]
    pub charset: String,

    /// Minimum word length. `0` includes the empty word.
    ///
    /// Environment variable: `WORDGEN_MIN`
    #[arg(short = 'm', long = "min", env = "WORDGEN_MIN", default_value_t = DEFAULT_MIN_LEN)]
    pub min_len: usize,

    /// Maximum word length.
    ///
    /// Environment variable: `WORDGEN_MAX`
    #[arg(short = 'M', long = "max", env = "WORDGEN_MAX", default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Stop after writing this many lines. Unbounded when omitted.
    ///
    /// Environment variable: `WORDGEN_LINES`
    #[arg(short = 'l', long = "lines", env = "WORDGEN_LINES")]
    pub max_lines: Option<u64>,

    /// Number of worker threads. `0` uses every available core.
    ///
    /// Workers beyond the charset size have nothing to do and exit at once.
    ///
    /// Environment variable: `WORDGEN_THREADS`
    #[arg(short = 't', long = "threads", env = "WORDGEN_THREADS", default_value_t = 1)]
    pub threads: usize,

    /// Output file, or `-` for standard output.
    ///
    /// Environment variable: `WORDGEN_OUTPUT`
    #[arg(short, long, env = "WORDGEN_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Log the resolved configuration and the final line count.
    ///
    /// These reports are shown even when `RUST_LOG` sets a quieter level.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Where generated lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Fully resolved settings for one run of the binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub output: OutputTarget,
}

impl TryFrom<CliArgs> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let num_threads = match args.threads {
            0 => num_cpus::get(),
            n => n,
        };

        let generation = GenerationConfig::builder(args.charset)
            .min_len(args.min_len)
            .max_len(args.max_len)
            .max_lines(args.max_lines)
            .num_threads(num_threads)
            .build()
            .context("invalid generation settings")?;

        let output = if args.output.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(args.output)
        };

        Ok(Self { generation, output })
    }
}

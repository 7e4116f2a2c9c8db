use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;

use crate::config::OutputTarget;

/// Buffer size for the output writer. Lines are tiny, so batch them.
const OUTPUT_BUFFER_BYTES: usize = 64 * 1024;

/// Opens the output target, truncating a file target so every run starts
/// from an empty file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or truncated.
pub fn open(target: &OutputTarget) -> anyhow::Result<BufWriter<Box<dyn Write + Send>>> {
    let writer: Box<dyn Write + Send> = match target {
        OutputTarget::Stdout => Box::new(io::stdout()),
        OutputTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not open output file {}", path.display()))?;
            Box::new(file)
        }
    };
    Ok(BufWriter::with_capacity(OUTPUT_BUFFER_BYTES, writer))
}

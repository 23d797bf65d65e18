//! Flat-file persistence for integer datasets.
//!
//! The data file is plain text holding whitespace-separated integers, so it
//! can be edited by hand between runs. The format is deliberately frozen;
//! there is no versioning.

use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

const KEYS_PER_LINE: usize = 5;

/// Creates the data file and any missing parent directories, so later loads
/// and saves only have to deal with ordinary I/O errors.
pub fn ensure(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    if !path.exists() {
        fs::File::create(path)?;
        info!(path = %path.display(), "created empty data file");
    }
    Ok(())
}

/// Reads the keys from a data file in file order. An empty file yields an
/// empty vector.
pub fn load(path: &Path) -> Result<Vec<i64>> {
    let contents = fs::read_to_string(path)?;
    let mut keys = Vec::new();
    for token in contents.split_whitespace() {
        keys.push(token.parse::<i64>()?);
    }
    debug!(path = %path.display(), count = keys.len(), "loaded data file");
    Ok(keys)
}

/// Writes the keys to a data file, a few per line, replacing any previous
/// contents.
pub fn save(path: &Path, keys: &[i64]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    for chunk in keys.chunks(KEYS_PER_LINE) {
        let line = chunk
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(file, "{}", line)?;
    }
    debug!(path = %path.display(), count = keys.len(), "saved data file");
    Ok(())
}

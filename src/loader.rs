use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum LoadError {
    #[error("failed to open {0}: {1}")]
    Open(String, std::io::Error),
    #[error("failed to read {0}: {1}")]
    Read(String, std::io::Error),
}

/// Reads the input file line by line, keeping every line that parses as a
/// base-10 `i64` in file order. Lines that fail to parse are skipped without
/// any user-visible signal.
pub(crate) fn load_numbers(path: &Path) -> Result<Vec<i64>, LoadError> {
    let file =
        File::open(path).map_err(|e| LoadError::Open(path.display().to_string(), e))?;

    let mut numbers = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| LoadError::Read(path.display().to_string(), e))?;
        match line.trim().parse::<i64>() {
            Ok(n) => numbers.push(n),
            Err(_) => debug!("skipping unparseable line {:?}", line),
        }
    }
    Ok(numbers)
}

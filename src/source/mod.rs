mod error;

pub use error::SourceError;

use std::fs;
use std::path::Path;

/// Upper bound on accepted CSV files (5 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Reads a CSV file after the boundary guards: the name must end in
/// `.csv` (case-insensitive) and the file must fit under `max_bytes`.
/// Both guards run before any content is read, so an oversized or
/// misnamed file is rejected without touching its bytes.
pub fn read_csv(path: &Path, max_bytes: u64) -> Result<Vec<u8>, SourceError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(SourceError::NotCsv {
            path: path.to_path_buf(),
        });
    }

    let meta = fs::metadata(path).map_err(SourceError::read)?;
    if meta.len() > max_bytes {
        return Err(SourceError::TooLarge {
            len: meta.len(),
            max: max_bytes,
        });
    }

    fs::read(path).map_err(SourceError::read)
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("'{}' is not a .csv file", .path.display())]
    NotCsv { path: PathBuf },
    #[error("file is {len} bytes, maximum allowed is {max}")]
    TooLarge { len: u64, max: u64 },
    #[error("reading CSV file failed: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub(crate) fn read(source: std::io::Error) -> Self {
        Self::Read { source }
    }
}

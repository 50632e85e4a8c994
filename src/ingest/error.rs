use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV content is not valid UTF-8")]
    InvalidUtf8 {
        #[source]
        source: std::str::Utf8Error,
    },
}

impl IngestError {
    pub(crate) fn utf8(source: std::str::Utf8Error) -> Self {
        Self::InvalidUtf8 { source }
    }
}

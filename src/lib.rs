#![forbid(unsafe_code)]
//! mailsift_lib — CSV email validation pipeline (MVP)

pub mod batch;
pub mod ingest;
pub mod source;
pub mod validator;

pub use batch::{
    DEFAULT_BATCH_SIZE, export_filename, export_filename_at, serialize_results, validate_all,
    validate_all_batched,
};
pub use ingest::{IngestError, extract_emails};
pub use source::{DEFAULT_MAX_BYTES, SourceError, read_csv};
pub use validator::{ValidationResult, validate};

mod export;

pub use export::{export_filename, export_filename_at, serialize_results};

use crate::validator::{ValidationResult, validate};

/// Chunk size used when the caller does not override it.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Validates every candidate with the default batch size.
pub fn validate_all(candidates: &[String]) -> Vec<ValidationResult> {
    validate_all_batched(candidates, DEFAULT_BATCH_SIZE)
}

/// Validates every candidate: one result per input, in input order,
/// identical to mapping [`validate`] over the list directly.
///
/// Lists at or under `batch_size` are mapped inline. Larger lists are
/// split into contiguous chunks; each chunk runs on its own scoped task
/// and writes into its own disjoint slice of the output, so chunk
/// completion order never affects result order. The scope joins every
/// task before the results are returned, and no task can fail because
/// [`validate`] is total.
pub fn validate_all_batched(candidates: &[String], batch_size: usize) -> Vec<ValidationResult> {
    let batch_size = batch_size.max(1);
    if candidates.len() <= batch_size {
        return candidates.iter().map(|c| validate(c)).collect();
    }

    let mut results = vec![ValidationResult::default(); candidates.len()];
    std::thread::scope(|scope| {
        for (chunk, out) in candidates
            .chunks(batch_size)
            .zip(results.chunks_mut(batch_size))
        {
            scope.spawn(move || {
                for (candidate, slot) in chunk.iter().zip(out.iter_mut()) {
                    *slot = validate(candidate);
                }
            });
        }
    });

    #[cfg(feature = "with-tracing")]
    tracing::debug!(
        candidates = candidates.len(),
        batch_size,
        "batched validation complete"
    );
    results
}

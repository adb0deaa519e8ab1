//! NAPI-exposed data structures.

use napi_derive::napi;

/// Result of normalizing a single document, with the metadata an editor
/// shell needs to skip no-op edits.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct NormalizeReport {
    /// Normalized text.
    pub text: String,
    /// Whether normalization changed the input at all.
    pub changed: bool,
    /// Line count of the input.
    pub lines_in: u32,
    /// Line count of the output.
    pub lines_out: u32,
}

/// One document in a batch normalization request.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Caller-supplied identifier echoed back with the result.
    pub id: String,
    /// Document text to normalize.
    pub source: String,
}

/// Options accepted by the batch entry point.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Caps the Rayon thread pool; defaults to all available cores.
    pub max_threads: Option<u32>,
}

/// Per-document result of a batch run.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Identifier from the matching [`BatchInput`].
    pub id: String,
    /// Normalized text.
    pub text: String,
    /// Whether normalization changed this document.
    pub changed: bool,
}

/// Aggregate statistics for a batch run.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Number of documents processed.
    pub total: u32,
    /// Number of documents whose text changed.
    pub changed: u32,
    /// Wall-clock processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Everything returned from a batch run.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Per-document results, in input order.
    pub results: Vec<BatchResult>,
    /// Aggregate statistics.
    pub stats: BatchStats,
}

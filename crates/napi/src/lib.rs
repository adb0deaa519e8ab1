#![deny(missing_docs)]
//! Node.js bindings that surface the tidypaste normalizer.
//!
//! The editor shell calls [`normalize_text`] (or [`normalize_report`] when
//! it wants to skip no-op edits); [`normalize_batch`] fans a set of
//! documents out over Rayon. All semantics live in `tidypaste-core`.

use napi_derive::napi;

/// NAPI-exposed data structures.
pub mod types;
pub use types::*;

/// Normalizes pasted multi-line text and returns the tidy string.
///
/// Total over all inputs; there is no error channel.
#[napi(js_name = "normalizeText")]
pub fn normalize_text(input: String) -> String {
    tidypaste_core::normalize(&input)
}

/// Normalizes pasted text and reports whether anything changed.
///
/// `changed` is exact string inequality, so callers can replace the
/// editing surface's content only when the edit is real.
#[napi(js_name = "normalizeReport")]
pub fn normalize_report(input: String) -> NormalizeReport {
    let text = tidypaste_core::normalize(&input);
    NormalizeReport {
        changed: text != input,
        lines_in: input.split('\n').count() as u32,
        lines_out: text.split('\n').count() as u32,
        text,
    }
}

/// Normalizes multiple independent documents in parallel using Rayon.
///
/// Results come back in input order, keyed by the caller-supplied id.
/// Because normalization is total there is no per-item error channel;
/// `stats` carries counts and wall-clock timing.
#[napi(js_name = "normalizeBatch")]
pub fn normalize_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> BatchProcessingResult {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    let start = Instant::now();
    let opts = options.unwrap_or_default();

    // Dedicated pool only when the caller caps threads.
    let pool = opts.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    });

    let total = inputs.len() as u32;
    let changed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        let text = tidypaste_core::normalize(&input.source);
        let did_change = text != input.source;
        if did_change {
            changed.fetch_add(1, Ordering::Relaxed);
        }
        BatchResult {
            id: input.id,
            text,
            changed: did_change,
        }
    };

    let results: Vec<BatchResult> = if let Some(pool) = pool {
        pool.install(|| inputs.into_par_iter().map(process_input).collect())
    } else {
        inputs.into_par_iter().map(process_input).collect()
    };

    let elapsed = start.elapsed();

    BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            changed: changed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    }
}

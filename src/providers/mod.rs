/*!
 * Grapheme-to-phoneme backend implementations.
 *
 * This module contains the backend abstraction and its implementations:
 * - eSpeak NG: subprocess-based phonemization (the production backend)
 * - Mock: configurable fake backend for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;
use futures::stream::{self, StreamExt};
use log::debug;

use crate::errors::BackendError;

/// Common trait for all grapheme-to-phoneme backends
///
/// A backend takes an ordered batch of written word forms (optionally
/// carrying stress marks) and returns one phonemic transcription per
/// input, in the same order, so the caller can zip the results back to
/// the source words.
#[async_trait]
pub trait Phonemizer: Send + Sync + Debug {
    /// Phonemize a batch of written forms
    ///
    /// # Arguments
    /// * `batch` - The written forms to transcribe, in order
    ///
    /// # Returns
    /// * `Result<Vec<String>, BackendError>` - One transcription per input, same order
    async fn phonemize(&self, batch: &[String]) -> Result<Vec<String>, BackendError>;

    /// Test that the backend is available
    ///
    /// # Returns
    /// * `Result<(), BackendError>` - Ok if the backend can be invoked
    async fn test_connection(&self) -> Result<(), BackendError>;

    /// Backend display name for diagnostics
    fn name(&self) -> &'static str;
}

/// Batch orchestrator for a phonemization backend
///
/// Splits one logical batch into chunks and runs them through the
/// backend with bounded concurrency, reporting progress per chunk and
/// reassembling results in input order.
pub struct BatchPhonemizer {
    /// The backend to drive
    backend: Arc<dyn Phonemizer>,

    /// Maximum number of chunks in flight at once
    workers: usize,

    /// Number of words per chunk
    chunk_size: usize,
}

impl BatchPhonemizer {
    /// Create a new batch orchestrator
    pub fn new(backend: Arc<dyn Phonemizer>, workers: usize, chunk_size: usize) -> Self {
        Self {
            backend,
            workers: workers.max(1),
            chunk_size: chunk_size.max(1),
        }
    }

    /// Phonemize all words, preserving input order.
    ///
    /// A failure in any chunk fails the whole batch; the caller treats
    /// that as "zero derived results" and keeps going with whatever the
    /// dictionary source provided.
    pub async fn phonemize_all(
        &self,
        words: &[String],
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Result<Vec<String>, BackendError> {
        if words.is_empty() {
            return Ok(Vec::new());
        }

        let chunks: Vec<Vec<String>> = words
            .chunks(self.chunk_size)
            .map(|chunk| chunk.to_vec())
            .collect();
        let total_chunks = chunks.len();

        debug!(
            "Phonemizing {} words in {} chunks via {} ({} workers)",
            words.len(),
            total_chunks,
            self.backend.name(),
            self.workers
        );

        // Bound concurrency with a semaphore, as chunk spawning is eager
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let processed_chunks = Arc::new(AtomicUsize::new(0));

        let results = stream::iter(chunks.into_iter().enumerate())
            .map(|(chunk_index, chunk)| {
                let backend = self.backend.clone();
                let semaphore = semaphore.clone();
                let processed_chunks = processed_chunks.clone();
                let progress_callback = progress_callback.clone();

                async move {
                    let _permit = semaphore.acquire().await.expect("semaphore closed");

                    let result = backend.phonemize(&chunk).await;

                    let current = processed_chunks.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(current, total_chunks);

                    (chunk_index, result)
                }
            })
            .buffer_unordered(self.workers)
            .collect::<Vec<_>>()
            .await;

        // Reassemble in input order
        let mut sorted_results = results;
        sorted_results.sort_by_key(|(idx, _)| *idx);

        let mut transcriptions = Vec::with_capacity(words.len());
        for (_, result) in sorted_results {
            transcriptions.extend(result?);
        }

        if transcriptions.len() != words.len() {
            return Err(BackendError::LengthMismatch {
                got: transcriptions.len(),
                expected: words.len(),
            });
        }

        Ok(transcriptions)
    }
}

pub mod espeak;
pub mod mock;

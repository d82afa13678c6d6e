/*!
 * Mock backend implementations for testing.
 *
 * This module provides mock backends that simulate different behaviors:
 * - `MockPhonemizer::working()` - Echoes each input back
 * - `MockPhonemizer::with_table(..)` - Looks transcriptions up in a fixed table
 * - `MockPhonemizer::failing()` - Always fails with an error
 * - `MockPhonemizer::sentinel()` - Returns the upstream "nan" error token
 * - `MockPhonemizer::empty()` - Returns empty strings
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::BackendError;
use crate::providers::Phonemizer;

/// Behavior mode for the mock backend
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Echoes each written form back unchanged
    Echo,
    /// Looks each word up in a fixed table; unknown words get the fallback
    Table { fallback: String },
    /// Always fails with an error
    Failing,
    /// Returns the "nan" sentinel for every word
    Sentinel,
    /// Returns an empty string for every word
    Empty,
}

/// Mock backend for testing the derived-source pipeline
#[derive(Debug)]
pub struct MockPhonemizer {
    /// Behavior mode
    behavior: MockBehavior,
    /// Fixed lookup table for `Table` behavior
    table: HashMap<String, String>,
    /// Number of phonemize calls received
    call_count: Arc<AtomicUsize>,
}

impl MockPhonemizer {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            table: HashMap::new(),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock that echoes inputs back
    pub fn working() -> Self {
        Self::new(MockBehavior::Echo)
    }

    /// Create a mock backed by a fixed word -> transcription table
    pub fn with_table(pairs: &[(&str, &str)]) -> Self {
        let mut mock = Self::new(MockBehavior::Table { fallback: String::new() });
        mock.table = pairs
            .iter()
            .map(|(word, transcription)| (word.to_string(), transcription.to_string()))
            .collect();
        mock
    }

    /// Create a failing mock backend that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns the "nan" sentinel
    pub fn sentinel() -> Self {
        Self::new(MockBehavior::Sentinel)
    }

    /// Create a mock that returns empty transcriptions
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Number of phonemize calls this mock has received
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Phonemizer for MockPhonemizer {
    async fn phonemize(&self, batch: &[String]) -> Result<Vec<String>, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Echo => Ok(batch.to_vec()),
            MockBehavior::Table { fallback } => Ok(batch
                .iter()
                .map(|word| self.table.get(word).cloned().unwrap_or_else(|| fallback.clone()))
                .collect()),
            MockBehavior::Failing => Err(BackendError::ProcessFailed(
                "mock backend configured to fail".to_string(),
            )),
            MockBehavior::Sentinel => Ok(batch.iter().map(|_| "nan".to_string()).collect()),
            MockBehavior::Empty => Ok(batch.iter().map(|_| String::new()).collect()),
        }
    }

    async fn test_connection(&self) -> Result<(), BackendError> {
        match self.behavior {
            MockBehavior::Failing => Err(BackendError::Unavailable(
                "mock backend configured to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

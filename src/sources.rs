use std::path::Path;
use anyhow::Result;
use log::{debug, warn};

use crate::errors::SourceError;
use crate::file_utils::FileManager;

// @module: Ingestion of the two tabular pronunciation sources

/// Which upstream produced a record
///
/// The dictionary source carries authoritative transcriptions and always
/// outranks the derived source during the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Wiktionary-derived IPA table
    Dictionary,
    /// Stress-annotated corpus phonemized through the backend
    Derived,
}

impl SourceKind {
    // @returns: Merge priority, higher wins
    pub fn priority(&self) -> u8 {
        match self {
            Self::Dictionary => 2,
            Self::Derived => 1,
        }
    }
}

// @struct: Single word/transcription pair read from a source table
#[derive(Debug, Clone)]
pub struct SourceRecord {
    // @field: Lookup word (merge key)
    pub word: String,

    // @field: Raw transcription for Dictionary records,
    //         stressed written form for Derived records
    pub transcription: String,

    // @field: Originating source
    pub kind: SourceKind,
}

impl SourceRecord {
    /// Creates a new source record with a lowercased, trimmed word key
    pub fn new(word: &str, transcription: &str, kind: SourceKind) -> Self {
        SourceRecord {
            word: word.trim().to_lowercase(),
            transcription: transcription.trim().to_string(),
            kind,
        }
    }
}

/// Words that must never become lexicon keys: empty strings and
/// hyphen-bounded fragments (affixes leaked from the corpus).
pub fn is_garbage_word(word: &str) -> bool {
    let word = word.trim();
    word.is_empty() || word.starts_with('-') || word.ends_with('-')
}

/// Read a tab-delimited source table into records of the given kind.
///
/// The first line is a header and is skipped. Rows with fewer than two
/// columns, or whose word fails the garbage filter, are skipped with a
/// diagnostic; they never abort the read.
pub fn read_source_table<P: AsRef<Path>>(path: P, kind: SourceKind) -> Result<Vec<SourceRecord>, SourceError> {
    let path = path.as_ref();

    if !FileManager::file_exists(path) {
        return Err(SourceError::NotFound(path.display().to_string()));
    }

    let content = FileManager::read_to_string(path)
        .map_err(|e| SourceError::ReadFailed(e.to_string()))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in content.lines().enumerate() {
        // Header row
        if line_no == 0 {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let mut columns = line.splitn(3, '\t');
        let word = columns.next().unwrap_or_default();
        let transcription = match columns.next() {
            Some(t) => t,
            None => {
                debug!("Skipping malformed row {} in {:?}: no transcription column", line_no + 1, path);
                skipped += 1;
                continue;
            }
        };

        if is_garbage_word(word) || transcription.trim().is_empty() {
            debug!("Skipping unusable row {} in {:?}", line_no + 1, path);
            skipped += 1;
            continue;
        }

        records.push(SourceRecord::new(word, transcription, kind));
    }

    if skipped > 0 {
        warn!("Skipped {} unusable rows while reading {:?}", skipped, path);
    }

    debug!("Read {} records from {:?}", records.len(), path);
    Ok(records)
}

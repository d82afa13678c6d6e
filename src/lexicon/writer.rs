/*!
 * Deterministic serialization of the merged lexicon.
 *
 * One tab-delimited row per (word, transcription) pair, no header,
 * ordered by word then by transcription using plain code-point order.
 * Re-running the pipeline on unchanged inputs yields a byte-identical
 * file; the auditor relies on that as its regression contract.
 */

use std::path::Path;
use anyhow::Result;

use crate::file_utils::FileManager;
use super::merge::Lexicon;

/// Flatten the lexicon to ordered (word, transcription) rows
pub fn to_rows(lexicon: &Lexicon) -> Vec<(String, String)> {
    let mut rows = Vec::with_capacity(lexicon.row_count());
    for (word, transcriptions) in lexicon.iter() {
        for transcription in transcriptions {
            rows.push((word.clone(), transcription.clone()));
        }
    }
    rows
}

/// Render rows as the final tab-delimited table
pub fn to_tsv(lexicon: &Lexicon) -> String {
    let mut out = String::new();
    for (word, transcription) in to_rows(lexicon) {
        out.push_str(&word);
        out.push('\t');
        out.push_str(&transcription);
        out.push('\n');
    }
    out
}

/// Write the final lexicon table to disk
pub fn write_tsv<P: AsRef<Path>>(lexicon: &Lexicon, path: P) -> Result<()> {
    FileManager::write_to_file(path, &to_tsv(lexicon))
}

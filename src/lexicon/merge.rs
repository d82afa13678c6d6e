/*!
 * Homograph-aware, priority-ordered merging of the two sources.
 *
 * The merge runs in two phases. Phase one ingests every dictionary
 * record unconditionally. Phase two ingests derived records only for
 * words the dictionary did not cover: once a word has an authoritative
 * transcription, lower-priority candidates are skipped outright rather
 * than diluting the entry. Distinct transcriptions for the same word
 * (true homographs) accumulate into a set and all survive to the output.
 */

use std::collections::{BTreeMap, BTreeSet};
use log::debug;

use crate::sources::{SourceRecord, is_garbage_word};
use super::rules::RuleSet;

/// The in-memory lexicon: word -> ordered set of normalized transcriptions.
///
/// BTree collections keep both words and per-word variants in code-point
/// order, which is what makes repeated runs byte-identical.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl Lexicon {
    /// Creates an empty lexicon
    pub fn new() -> Self {
        Lexicon {
            entries: BTreeMap::new(),
        }
    }

    /// Number of distinct words
    pub fn word_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of (word, transcription) rows the writer will emit
    pub fn row_count(&self) -> usize {
        self.entries.values().map(|set| set.len()).sum()
    }

    /// Whether the lexicon already has at least one transcription for a word
    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// The transcription set for a word, if present
    pub fn transcriptions(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(word)
    }

    /// Iterate entries in word order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }

    /// Insert one normalized transcription for a word.
    ///
    /// Garbage words and empty transcriptions are rejected so that no
    /// entry ever exists with zero usable transcriptions.
    pub fn insert(&mut self, word: &str, transcription: &str) -> bool {
        let word = word.trim().to_lowercase();
        if is_garbage_word(&word) || transcription.is_empty() {
            return false;
        }
        self.entries.entry(word).or_default().insert(transcription.to_string())
    }

    /// Force-set the transcription set for a word, discarding anything learned
    pub fn force_set(&mut self, word: &str, transcription: &str) {
        let mut set = BTreeSet::new();
        set.insert(transcription.to_string());
        self.entries.insert(word.to_string(), set);
    }

    /// Two-phase merge of dictionary and derived records.
    ///
    /// Each record's raw transcription is normalized through `rules`;
    /// records that normalize to nothing are dropped. A derived record
    /// whose word already has a dictionary entry is skipped entirely.
    pub fn merge(
        dictionary_records: &[SourceRecord],
        derived_records: &[SourceRecord],
        rules: &RuleSet,
    ) -> Lexicon {
        let mut lexicon = Lexicon::new();

        // Phase one: the authoritative source, taken in full
        let mut dictionary_dropped = 0usize;
        for record in dictionary_records {
            match rules.normalize(&record.transcription, &record.word) {
                Some(normalized) => {
                    lexicon.insert(&record.word, &normalized);
                }
                None => dictionary_dropped += 1,
            }
        }
        let dictionary_words = lexicon.word_count();

        // Phase two: derived candidates, only for words the dictionary
        // did not cover. The check is against the phase-one key set, not
        // the live lexicon: several derived records for the same word are
        // homograph variants and must all accumulate.
        let covered: BTreeSet<String> = lexicon.entries.keys().cloned().collect();
        let mut derived_skipped = 0usize;
        let mut derived_dropped = 0usize;
        for record in derived_records {
            if covered.contains(&record.word) {
                derived_skipped += 1;
                continue;
            }
            match rules.normalize(&record.transcription, &record.word) {
                Some(normalized) => {
                    lexicon.insert(&record.word, &normalized);
                }
                None => derived_dropped += 1,
            }
        }

        debug!(
            "Merged {} dictionary words ({} records dropped) and {} derived words ({} outranked, {} dropped)",
            dictionary_words,
            dictionary_dropped,
            lexicon.word_count() - dictionary_words,
            derived_skipped,
            derived_dropped
        );

        lexicon
    }
}

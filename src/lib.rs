/*!
 * # bglex - Bulgarian pronunciation lexicon builder
 *
 * A Rust library for building a canonical word -> IPA lexicon for
 * Bulgarian from two heterogeneous sources.
 *
 * ## Features
 *
 * - Ingest a Wiktionary-derived IPA table (authoritative, incomplete)
 * - Phonemize a stress-annotated word list through eSpeak NG
 * - Merge both sources under strict dictionary-first priority
 * - Preserve true homographs as separate lexicon rows
 * - Normalize transcriptions through an ordered, named rule chain
 * - Force-override single-letter entries with the authoritative alphabet
 * - Emit a deterministic, sorted, tab-delimited lexicon
 * - Audit the written lexicon for leaked transcription artifacts
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `fetch`: Source download and extraction
 * - `sources`: Source table ingestion
 * - `lexicon`: The merge-and-normalize core:
 *   - `lexicon::rules`: ordered phonological rewrite rules
 *   - `lexicon::merge`: homograph-aware priority merge
 *   - `lexicon::alphabet`: authoritative letter overrides
 *   - `lexicon::writer`: deterministic serialization
 *   - `lexicon::audit`: character-inventory audit
 * - `providers`: Grapheme-to-phoneme backends:
 *   - `providers::espeak`: eSpeak NG subprocess backend
 *   - `providers::mock`: mock backend for tests
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language tag utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod fetch;
pub mod sources;
pub mod lexicon;
pub mod app_controller;
pub mod language_utils;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use sources::{SourceKind, SourceRecord};
pub use lexicon::{AlphabetTable, AuditReport, Lexicon, PhonemeRule, RuleSet};
pub use errors::{AppError, BackendError, SourceError};

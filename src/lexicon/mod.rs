/*!
 * The merge-and-normalize core of the lexicon builder.
 *
 * This module contains the pure, sequential pipeline stages:
 * - `lexicon::rules`: ordered phonological rewrite rules
 * - `lexicon::merge`: homograph-aware, priority-ordered source merging
 * - `lexicon::alphabet`: authoritative single-letter overrides
 * - `lexicon::writer`: deterministic serialization of the final table
 * - `lexicon::audit`: post-hoc character-inventory validation
 */

pub mod rules;
pub mod merge;
pub mod alphabet;
pub mod writer;
pub mod audit;

pub use rules::{PhonemeRule, RuleSet};
pub use merge::Lexicon;
pub use alphabet::AlphabetTable;
pub use audit::AuditReport;

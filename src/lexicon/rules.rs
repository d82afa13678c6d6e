/*!
 * Ordered phonological rewrite rules.
 *
 * A raw transcription coming back from the backend (or scraped from the
 * dictionary source) carries artifacts that must not reach the final
 * lexicon: language-switch annotations, leftover bracket delimiters,
 * length and secondary-stress markers, non-target vowel symbols, and
 * un-merged affricate sequences. Each fix is a named rule; rules are
 * applied strictly in declaration order and every rule is idempotent on
 * its own output.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// @const: Language-switch annotations emitted by the backend, e.g. "(en)"
static LANG_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\([a-zA-Z][a-zA-Z-]{1,5}\)").unwrap()
});

// @const: Runs of whitespace (including non-breaking artifacts)
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap()
});

/// Sentinel produced upstream for non-transcribable input
const INVALID_SENTINEL: &str = "nan";

/// What a rule does to the transcription
#[derive(Debug, Clone)]
enum RuleAction {
    /// Delete every occurrence of the listed characters
    StripChars(&'static [char]),

    /// Delete backend language-switch annotations
    StripLangTags,

    /// Replace every occurrence of `from` with `to`; `to` never
    /// contains `from`, so reapplication is a no-op
    Replace {
        from: &'static str,
        to: &'static str,
    },

    /// Merge a stop+fricative sequence into a tied affricate, but only
    /// when the merged form is not already present anywhere in the
    /// string (the guard that makes the rule idempotent)
    MergeAffricate {
        split: &'static str,
        merged: &'static str,
    },

    /// Like `MergeAffricate`, but additionally gated on the source word
    /// containing a licensing grapheme, so the cluster is never injected
    /// into words where the sequence arose for unrelated reasons
    MergeAffricateForGrapheme {
        grapheme: char,
        split: &'static str,
        merged: &'static str,
    },

    /// Collapse whitespace runs to a single space and trim
    CollapseWhitespace,
}

/// A single named rewrite step
#[derive(Debug, Clone)]
pub struct PhonemeRule {
    /// Stable rule identifier, used in diagnostics and tests
    pub name: &'static str,
    action: RuleAction,
}

impl PhonemeRule {
    /// Apply this rule to a transcription in the context of its source word
    pub fn apply(&self, transcription: &str, word: &str) -> String {
        match &self.action {
            RuleAction::StripChars(chars) => {
                transcription.replace(*chars, "")
            }
            RuleAction::StripLangTags => {
                // Removing an inner tag can expose a new one around it,
                // so strip repeatedly until no tag remains
                let mut current = transcription.to_string();
                while LANG_TAG_REGEX.is_match(&current) {
                    current = LANG_TAG_REGEX.replace_all(&current, "").into_owned();
                }
                current
            }
            RuleAction::Replace { from, to } => {
                transcription.replace(from, to)
            }
            RuleAction::MergeAffricate { split, merged } => {
                if transcription.contains(split) && !transcription.contains(merged) {
                    transcription.replace(split, merged)
                } else {
                    transcription.to_string()
                }
            }
            RuleAction::MergeAffricateForGrapheme { grapheme, split, merged } => {
                if word.contains(*grapheme)
                    && transcription.contains(split)
                    && !transcription.contains(merged)
                {
                    transcription.replace(split, merged)
                } else {
                    transcription.to_string()
                }
            }
            RuleAction::CollapseWhitespace => {
                WHITESPACE_REGEX.replace_all(transcription, " ").trim().to_string()
            }
        }
    }
}

/// An ordered chain of rewrite rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<PhonemeRule>,
}

impl RuleSet {
    /// The rule chain for the Bulgarian lexicon, in application order
    pub fn bulgarian() -> Self {
        let rules = vec![
            // Dictionary transcriptions arrive wrapped in /.../ or [...]
            PhonemeRule {
                name: "strip-delimiters",
                action: RuleAction::StripChars(&['/', '[', ']']),
            },
            // eSpeak marks foreign-word fallbacks with "(en)...(bg)"
            PhonemeRule {
                name: "strip-language-tags",
                action: RuleAction::StripLangTags,
            },
            // eSpeak uses schwa for the Bulgarian back unrounded vowel
            PhonemeRule {
                name: "schwa-to-back-vowel",
                action: RuleAction::Replace { from: "\u{0259}", to: "\u{0264}" },
            },
            // Central i never surfaces in the target inventory
            PhonemeRule {
                name: "central-i-to-front-i",
                action: RuleAction::Replace { from: "\u{0268}", to: "i" },
            },
            // ASCII g to the IPA script g
            PhonemeRule {
                name: "ascii-g-to-script-g",
                action: RuleAction::Replace { from: "g", to: "\u{0261}" },
            },
            // Bulgarian has no phonemic length; secondary stress is unused
            PhonemeRule {
                name: "strip-length-and-secondary-stress",
                action: RuleAction::StripChars(&['\u{02d0}', '\u{02cc}']),
            },
            // ц: ts must carry a tie-bar
            PhonemeRule {
                name: "tie-ts",
                action: RuleAction::MergeAffricate { split: "ts", merged: "t\u{0361}s" },
            },
            // ч: tʃ must carry a tie-bar
            PhonemeRule {
                name: "tie-tsh",
                action: RuleAction::MergeAffricate { split: "t\u{0283}", merged: "t\u{0361}\u{0283}" },
            },
            // щ: the backend renders it as ʃt; the target inventory wants
            // the ʃt͡ʃ cluster, but only in words actually spelled with щ
            PhonemeRule {
                name: "sht-cluster",
                action: RuleAction::MergeAffricateForGrapheme {
                    grapheme: 'щ',
                    split: "\u{0283}t",
                    merged: "\u{0283}t\u{0361}\u{0283}",
                },
            },
            PhonemeRule {
                name: "collapse-whitespace",
                action: RuleAction::CollapseWhitespace,
            },
        ];

        RuleSet { rules }
    }

    /// The rules in application order
    pub fn rules(&self) -> &[PhonemeRule] {
        &self.rules
    }

    /// Normalize a raw transcription in the context of its source word.
    ///
    /// Returns `None` when the record is unusable: empty input, the
    /// upstream "not a number" sentinel, or a result that is empty after
    /// all rules ran. Callers must drop such records entirely.
    pub fn normalize(&self, raw: &str, word: &str) -> Option<String> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case(INVALID_SENTINEL) {
            return None;
        }

        let mut transcription = raw.to_string();
        for rule in &self.rules {
            transcription = rule.apply(&transcription, word);
        }

        let transcription = transcription.trim();
        if transcription.is_empty() {
            None
        } else {
            Some(transcription.to_string())
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::bulgarian()
    }
}

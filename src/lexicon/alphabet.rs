/*!
 * Authoritative single-letter pronunciations.
 *
 * The pronunciation of each Bulgarian letter on its own is a closed,
 * hand-specified table. A generic backend gets several of them wrong
 * (most visibly щ, which it renders as a bare ʃt), so after the merge
 * every single-letter key is force-overridden with this table - an
 * override, never a union.
 */

use once_cell::sync::Lazy;

use super::merge::Lexicon;

/// One authoritative letter -> phoneme pair
#[derive(Debug, Clone, Copy)]
pub struct AlphabetEntry {
    /// The single grapheme used as the lexicon key
    pub letter: &'static str,
    /// Its phonemic value; may be empty (ь carries no sound of its own)
    pub phoneme: &'static str,
}

/// The Bulgarian alphabet table, with tie-bars on the affricates
static BULGARIAN_ALPHABET: Lazy<Vec<AlphabetEntry>> = Lazy::new(|| {
    vec![
        AlphabetEntry { letter: "а", phoneme: "a" },
        AlphabetEntry { letter: "б", phoneme: "b" },
        AlphabetEntry { letter: "в", phoneme: "v" },
        AlphabetEntry { letter: "г", phoneme: "\u{0261}" },
        AlphabetEntry { letter: "д", phoneme: "d" },
        AlphabetEntry { letter: "е", phoneme: "\u{025b}" },
        AlphabetEntry { letter: "ж", phoneme: "\u{0292}" },
        AlphabetEntry { letter: "з", phoneme: "z" },
        AlphabetEntry { letter: "и", phoneme: "i" },
        AlphabetEntry { letter: "й", phoneme: "j" },
        AlphabetEntry { letter: "к", phoneme: "k" },
        AlphabetEntry { letter: "л", phoneme: "l" },
        AlphabetEntry { letter: "м", phoneme: "m" },
        AlphabetEntry { letter: "н", phoneme: "n" },
        AlphabetEntry { letter: "о", phoneme: "\u{0254}" },
        AlphabetEntry { letter: "п", phoneme: "p" },
        AlphabetEntry { letter: "р", phoneme: "r" },
        AlphabetEntry { letter: "с", phoneme: "s" },
        AlphabetEntry { letter: "т", phoneme: "t" },
        AlphabetEntry { letter: "у", phoneme: "u" },
        AlphabetEntry { letter: "ф", phoneme: "f" },
        AlphabetEntry { letter: "х", phoneme: "x" },
        AlphabetEntry { letter: "ц", phoneme: "t\u{0361}s" },
        AlphabetEntry { letter: "ч", phoneme: "t\u{0361}\u{0283}" },
        AlphabetEntry { letter: "ш", phoneme: "\u{0283}" },
        AlphabetEntry { letter: "щ", phoneme: "\u{0283}t\u{0361}\u{0283}" },
        AlphabetEntry { letter: "ъ", phoneme: "\u{0264}" },
        AlphabetEntry { letter: "ь", phoneme: "" },
        AlphabetEntry { letter: "ю", phoneme: "ju" },
        AlphabetEntry { letter: "я", phoneme: "ja" },
    ]
});

/// The authoritative letter table
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabetTable;

impl AlphabetTable {
    /// The entries in alphabet order
    pub fn entries(&self) -> &'static [AlphabetEntry] {
        &BULGARIAN_ALPHABET
    }

    /// Look up the authoritative phoneme for a single letter
    pub fn phoneme_for(&self, letter: &str) -> Option<&'static str> {
        self.entries()
            .iter()
            .find(|entry| entry.letter == letter)
            .map(|entry| entry.phoneme)
    }

    /// Force-override every single-letter key with its authoritative
    /// phoneme, discarding whatever the merge learned for that letter.
    /// Letters absent from the merge are inserted.
    pub fn canonicalize(&self, lexicon: &mut Lexicon) {
        for entry in self.entries() {
            lexicon.force_set(entry.letter, entry.phoneme);
        }
    }
}

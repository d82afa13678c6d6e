/*!
 * Tests for the two-phase, homograph-aware merge
 */

use bglex::{Lexicon, RuleSet, SourceKind, SourceRecord};

fn dictionary(word: &str, ipa: &str) -> SourceRecord {
    SourceRecord::new(word, ipa, SourceKind::Dictionary)
}

fn derived(word: &str, ipa: &str) -> SourceRecord {
    SourceRecord::new(word, ipa, SourceKind::Derived)
}

/// Dictionary records always win: derived candidates for a covered word
/// are skipped outright, not unioned in
#[test]
fn test_merge_withWordInBothSources_shouldKeepOnlyDictionary() {
    let rules = RuleSet::bulgarian();
    let lexicon = Lexicon::merge(
        &[dictionary("дума", "ˈduma")],
        &[derived("дума", "dumˈa")],
        &rules,
    );

    let transcriptions = lexicon.transcriptions("дума").unwrap();
    assert_eq!(transcriptions.len(), 1);
    assert!(transcriptions.contains("ˈduma"));
    assert!(!transcriptions.contains("dumˈa"));
}

/// Two distinct stress placements for one word are true homographs and
/// both must survive the merge
#[test]
fn test_merge_withDerivedHomographs_shouldKeepAllVariants() {
    let rules = RuleSet::bulgarian();
    let lexicon = Lexicon::merge(
        &[],
        &[derived("вълна", "vˈɤlna"), derived("вълна", "vɤlnˈa")],
        &rules,
    );

    let transcriptions = lexicon.transcriptions("вълна").unwrap();
    assert_eq!(transcriptions.len(), 2);
    assert!(transcriptions.contains("vˈɤlna"));
    assert!(transcriptions.contains("vɤlnˈa"));
}

/// Dictionary-internal homographs are treated the same way: all kept
#[test]
fn test_merge_withDictionaryHomographs_shouldKeepAllVariants() {
    let rules = RuleSet::bulgarian();
    let lexicon = Lexicon::merge(
        &[dictionary("пара", "pˈara"), dictionary("пара", "parˈa")],
        &[],
        &rules,
    );

    assert_eq!(lexicon.transcriptions("пара").unwrap().len(), 2);
}

/// Duplicate transcriptions collapse to one set element
#[test]
fn test_merge_withDuplicateTranscriptions_shouldDeduplicate() {
    let rules = RuleSet::bulgarian();
    let lexicon = Lexicon::merge(
        &[dictionary("котка", "kˈotka"), dictionary("котка", "kˈotka")],
        &[],
        &rules,
    );

    assert_eq!(lexicon.transcriptions("котка").unwrap().len(), 1);
}

/// Two raw variants that normalize to the same string also collapse
#[test]
fn test_merge_withVariantsNormalizingEqually_shouldDeduplicate() {
    let rules = RuleSet::bulgarian();
    let lexicon = Lexicon::merge(
        &[dictionary("дума", "ˈdumə"), dictionary("дума", "ˈdumɤ")],
        &[],
        &rules,
    );

    let transcriptions = lexicon.transcriptions("дума").unwrap();
    assert_eq!(transcriptions.len(), 1);
    assert!(transcriptions.contains("ˈdumɤ"));
}

/// A record that normalizes to nothing must not create an entry
#[test]
fn test_merge_withSentinelTranscription_shouldDropRecord() {
    let rules = RuleSet::bulgarian();
    let lexicon = Lexicon::merge(&[], &[derived("дума", "nan")], &rules);

    assert!(!lexicon.contains_word("дума"));
    assert_eq!(lexicon.word_count(), 0);
}

/// Hyphen-bounded fragments never become lexicon keys
#[test]
fn test_merge_withGarbageWords_shouldDropRecords() {
    let rules = RuleSet::bulgarian();
    let lexicon = Lexicon::merge(
        &[dictionary("-та", "ta"), dictionary("по-", "po")],
        &[],
        &rules,
    );

    assert_eq!(lexicon.word_count(), 0);
}

/// Word keys are lowercased on the way in
#[test]
fn test_merge_withUppercaseWord_shouldLowercaseKey() {
    let rules = RuleSet::bulgarian();
    let lexicon = Lexicon::merge(&[dictionary("Дума", "ˈduma")], &[], &rules);

    assert!(lexicon.contains_word("дума"));
    assert!(!lexicon.contains_word("Дума"));
}

/// A dictionary word whose only record is unusable leaves the word
/// uncovered, so derived candidates for it are still accepted
#[test]
fn test_merge_withUnusableDictionaryRecord_shouldFallBackToDerived() {
    let rules = RuleSet::bulgarian();
    let lexicon = Lexicon::merge(
        &[dictionary("дума", "nan")],
        &[derived("дума", "dumˈa")],
        &rules,
    );

    let transcriptions = lexicon.transcriptions("дума").unwrap();
    assert_eq!(transcriptions.len(), 1);
    assert!(transcriptions.contains("dumˈa"));
}

/// No entry ever exists with zero transcriptions
#[test]
fn test_merge_withMixedRecords_shouldNeverLeaveEmptyEntries() {
    let rules = RuleSet::bulgarian();
    let lexicon = Lexicon::merge(
        &[dictionary("дума", "ˈduma"), dictionary("празна", "")],
        &[derived("котка", "kˈotka"), derived("счупена", "nan")],
        &rules,
    );

    for (_, transcriptions) in lexicon.iter() {
        assert!(!transcriptions.is_empty());
    }
    assert!(!lexicon.contains_word("празна"));
    assert!(!lexicon.contains_word("счупена"));
}

/*!
 * Tests for the phonological rewrite rules
 */

use bglex::RuleSet;

/// Battery of transcriptions covering every artifact the rules handle
fn sample_transcriptions() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ˈdumə", "дума"),
        ("gorˈa", "гора"),
        ("tsˈar", "цар"),
        ("tʃˈaʃə", "чаша"),
        ("ʃtˈɤrkɛl", "щъркел"),
        ("dˈuːmaˌ", "дума"),
        ("(en)wˈɜd(bg)", "уърд"),
        ("(e(bg)n)wˈɜd", "уърд"),
        ("vˈɤlna", "вълна"),
        ("t͡sˈɛl", "цел"),
        ("ʃt͡ʃˈastie", "щастие"),
        ("  mnˈɔgo  dˈumi  ", "много думи"),
    ]
}

/// Every rule must be idempotent: applying it twice to any input in the
/// context of any word gives the same result as applying it once
#[test]
fn test_rules_withAnyInput_shouldBeIdempotent() {
    let rules = RuleSet::bulgarian();

    for (transcription, word) in sample_transcriptions() {
        for rule in rules.rules() {
            let once = rule.apply(transcription, word);
            let twice = rule.apply(&once, word);
            assert_eq!(
                once, twice,
                "rule '{}' is not idempotent on '{}'",
                rule.name, transcription
            );
        }
    }
}

/// The whole chain must also be idempotent end to end
#[test]
fn test_normalize_withNormalizedInput_shouldBeStable() {
    let rules = RuleSet::bulgarian();

    for (transcription, word) in sample_transcriptions() {
        let once = rules.normalize(transcription, word);
        if let Some(once) = once {
            let twice = rules.normalize(&once, word).expect("normalized form became unusable");
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn test_normalize_withSchwa_shouldConvertToBackVowel() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("ˈdumə", "дума").unwrap(), "ˈdumɤ");
}

#[test]
fn test_normalize_withAsciiG_shouldConvertToScriptG() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("gorˈa", "гора").unwrap(), "ɡorˈa");
}

#[test]
fn test_normalize_withCentralI_shouldConvertToFrontI() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("mɨr", "мир").unwrap(), "mir");
}

#[test]
fn test_normalize_withLengthAndSecondaryStress_shouldStripThem() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("dˈuːmaˌ", "дума").unwrap(), "dˈuma");
}

#[test]
fn test_normalize_withDelimiters_shouldStripThem() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("/ˈduma/", "дума").unwrap(), "ˈduma");
    assert_eq!(rules.normalize("[ˈduma]", "дума").unwrap(), "ˈduma");
}

#[test]
fn test_normalize_withLanguageTags_shouldStripThem() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("(en)wˈɜd(bg)", "уърд").unwrap(), "wˈɜd");
}

/// Stripping an inner tag exposes the one wrapped around it; a single
/// normalize pass must already reach the stable form
#[test]
fn test_normalize_withNestedLanguageTags_shouldStripAll() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("(e(bg)n)wˈɜd", "уърд").unwrap(), "wˈɜd");
}

#[test]
fn test_normalize_withUnmergedTs_shouldAddTieBar() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("tsˈar", "цар").unwrap(), "t͡sˈar");
}

#[test]
fn test_normalize_withUnmergedTsh_shouldAddTieBar() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("tʃˈaʃa", "чаша").unwrap(), "t͡ʃˈaʃa");
}

/// A transcription that already carries the merged affricate must not be
/// merged again, even if a raw sequence is also present
#[test]
fn test_normalize_withAlreadyMergedAffricate_shouldNotDoubleMerge() {
    let rules = RuleSet::bulgarian();
    // Guard skips the rewrite when the tied form is present anywhere
    assert_eq!(rules.normalize("t͡sats", "цаца").unwrap(), "t͡sats");
}

#[test]
fn test_normalize_withShtWord_shouldInjectCluster() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("ʃtˈɤrkɛl", "щъркел").unwrap(), "ʃt͡ʃˈɤrkɛl");
}

/// The ʃt cluster fix only applies to words actually spelled with щ
#[test]
fn test_normalize_withShtSequenceButNoShtGrapheme_shouldNotRewrite() {
    let rules = RuleSet::bulgarian();
    // ʃt here comes from ш+т, which is a genuine two-phoneme sequence
    assert_eq!(rules.normalize("ʃtˈora", "штора").unwrap(), "ʃtˈora");
}

#[test]
fn test_normalize_withShtWordAlreadyFixed_shouldNotDoubleApply() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("ʃt͡ʃˈastie", "щастие").unwrap(), "ʃt͡ʃˈastie");
}

#[test]
fn test_normalize_withWhitespaceRuns_shouldCollapseAndTrim() {
    let rules = RuleSet::bulgarian();
    assert_eq!(rules.normalize("  mnˈɔgo \t dˈumi ", "много думи").unwrap(), "mnˈɔɡo dˈumi");
}

#[test]
fn test_normalize_withEmptyInput_shouldReturnNone() {
    let rules = RuleSet::bulgarian();
    assert!(rules.normalize("", "дума").is_none());
    assert!(rules.normalize("   ", "дума").is_none());
}

#[test]
fn test_normalize_withNanSentinel_shouldReturnNone() {
    let rules = RuleSet::bulgarian();
    assert!(rules.normalize("nan", "дума").is_none());
    assert!(rules.normalize("NaN", "дума").is_none());
    assert!(rules.normalize("  nan  ", "дума").is_none());
}

/// Input that is nothing but artifacts must normalize to None, never to
/// an empty entry
#[test]
fn test_normalize_withOnlyArtifacts_shouldReturnNone() {
    let rules = RuleSet::bulgarian();
    assert!(rules.normalize("/[]/", "дума").is_none());
    assert!(rules.normalize("(en)(bg)", "дума").is_none());
}

/// Rules run in declaration order: the ʃt fix sees the output of the
/// affricate merges, not the raw backend string
#[test]
fn test_normalize_withCombinedArtifacts_shouldApplyAllRules() {
    let rules = RuleSet::bulgarian();
    let normalized = rules.normalize("ʃtərkɛltsˈa", "щъркелца").unwrap();
    assert_eq!(normalized, "ʃt͡ʃɤrkɛlt͡sˈa");
}

/*!
 * Tests for the character-inventory audit
 */

use anyhow::Result;
use bglex::lexicon::audit;
use crate::common;

fn row(word: &str, transcription: &str) -> (String, String) {
    (word.to_string(), transcription.to_string())
}

#[test]
fn test_audit_rows_withCleanLexicon_shouldPass() {
    let rows = vec![
        row("дума", "ˈduma"),
        row("цар", "t͡sˈar"),
        row("щъркел", "ʃt͡ʃˈɤrkɛl"),
    ];

    let report = audit::audit_rows(&rows);
    assert!(report.pass());
    assert!(report.findings.is_empty());
    assert_eq!(report.total_rows, 3);
}

#[test]
fn test_audit_rows_withTieBarlessAffricate_shouldReportFinding() {
    let report = audit::audit_rows(&[row("цар", "tsˈar")]);

    assert!(!report.pass());
    assert!(report.findings.iter().any(|f| f.contains("tie-bar")));
}

/// A properly tied affricate must not trip the 'ts' substring check:
/// the tie-bar sits between the two letters
#[test]
fn test_audit_rows_withTiedAffricate_shouldNotReportTs() {
    let report = audit::audit_rows(&[row("цар", "t͡sˈar")]);
    assert!(report.pass());
}

#[test]
fn test_audit_rows_withNanSentinel_shouldReportFinding() {
    let report = audit::audit_rows(&[row("дума", "nan")]);

    assert!(!report.pass());
    assert!(report.findings.iter().any(|f| f.contains("nan")));
}

#[test]
fn test_audit_rows_withLeftoverBracket_shouldReportFinding() {
    let report = audit::audit_rows(&[row("уърд", "(en)wˈɜd")]);

    assert!(!report.pass());
    assert!(report.findings.iter().any(|f| f.contains("bracket")));
}

#[test]
fn test_audit_rows_withSchwa_shouldReportFinding() {
    let report = audit::audit_rows(&[row("дума", "ˈdumə")]);

    assert!(!report.pass());
    assert!(report.findings.iter().any(|f| f.contains("schwa")));
}

#[test]
fn test_audit_rows_withCyrillicInTranscription_shouldReportFinding() {
    let report = audit::audit_rows(&[row("дума", "ˈdумa")]);

    assert!(!report.pass());
    assert!(report.findings.iter().any(|f| f.contains("Cyrillic")));
}

/// Cyrillic in the word column is expected and must not be flagged
#[test]
fn test_audit_rows_withCyrillicWordColumn_shouldIgnoreIt() {
    let report = audit::audit_rows(&[row("дума", "ˈduma")]);
    assert!(report.pass());
}

#[test]
fn test_audit_rows_withMultipleProblems_shouldReportEach() {
    let rows = vec![row("a", "tsə"), row("b", "nan")];
    let report = audit::audit_rows(&rows);

    assert!(!report.pass());
    // tie-bar, schwa, and nan
    assert_eq!(report.findings.len(), 3);
}

#[test]
fn test_audit_rows_withRepeatedCharacters_shouldCountFrequencies() {
    let report = audit::audit_rows(&[row("дада", "dada")]);

    assert_eq!(report.char_counts.get(&'d'), Some(&2));
    assert_eq!(report.char_counts.get(&'a'), Some(&2));

    let most_common = report.most_common();
    assert_eq!(most_common.len(), 2);
    assert_eq!(most_common[0].1, 2);
}

#[test]
fn test_audit_file_withWrittenLexicon_shouldScanTranscriptions() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "lexicon.tsv",
        "дума\tˈduma\nцар\ttsˈar\n",
    )?;

    let report = audit::audit_file(&path)?;
    assert_eq!(report.total_rows, 2);
    assert!(!report.pass());
    assert!(report.findings.iter().any(|f| f.contains("tie-bar")));
    Ok(())
}

#[test]
fn test_audit_file_withMissingFile_shouldFail() {
    assert!(audit::audit_file("does_not_exist.tsv").is_err());
}

#[test]
fn test_render_withFindings_shouldMentionFailure() {
    let report = audit::audit_rows(&[row("дума", "nan")]);
    let rendered = report.render();

    assert!(rendered.contains("[FAIL]"));
    assert!(rendered.contains("nan"));
}

#[test]
fn test_render_withCleanLexicon_shouldMentionPass() {
    let report = audit::audit_rows(&[row("дума", "ˈduma")]);
    assert!(report.render().contains("[PASS]"));
}

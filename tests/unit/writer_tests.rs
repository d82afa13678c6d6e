/*!
 * Tests for deterministic lexicon serialization
 */

use anyhow::Result;
use bglex::Lexicon;
use bglex::lexicon::writer;
use crate::common;

fn sample_lexicon() -> Lexicon {
    let mut lexicon = Lexicon::new();
    lexicon.insert("вълна", "vɤlnˈa");
    lexicon.insert("вълна", "vˈɤlna");
    lexicon.insert("дума", "ˈduma");
    lexicon.insert("абажур", "abaʒˈur");
    lexicon
}

/// Rows come out ordered by word, then by transcription
#[test]
fn test_to_rows_withHomographs_shouldSortByWordThenTranscription() {
    let rows = writer::to_rows(&sample_lexicon());

    let expected = vec![
        ("абажур".to_string(), "abaʒˈur".to_string()),
        ("вълна".to_string(), "vɤlnˈa".to_string()),
        ("вълна".to_string(), "vˈɤlna".to_string()),
        ("дума".to_string(), "ˈduma".to_string()),
    ];
    assert_eq!(rows, expected);
}

/// Insertion order never affects the serialized output
#[test]
fn test_to_tsv_withDifferentInsertionOrder_shouldBeIdentical() {
    let mut reversed = Lexicon::new();
    reversed.insert("абажур", "abaʒˈur");
    reversed.insert("дума", "ˈduma");
    reversed.insert("вълна", "vˈɤlna");
    reversed.insert("вълна", "vɤlnˈa");

    assert_eq!(writer::to_tsv(&sample_lexicon()), writer::to_tsv(&reversed));
}

/// One tab-delimited row per pair, no header, trailing newline
#[test]
fn test_to_tsv_withSimpleLexicon_shouldFormatRows() {
    let mut lexicon = Lexicon::new();
    lexicon.insert("дума", "ˈduma");

    assert_eq!(writer::to_tsv(&lexicon), "дума\tˈduma\n");
}

/// Writing twice yields byte-identical files
#[test]
fn test_write_tsv_withSameLexicon_shouldBeByteIdentical() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let first = temp_dir.path().join("first.tsv");
    let second = temp_dir.path().join("second.tsv");

    let lexicon = sample_lexicon();
    writer::write_tsv(&lexicon, &first)?;
    writer::write_tsv(&lexicon, &second)?;

    assert_eq!(std::fs::read(&first)?, std::fs::read(&second)?);
    Ok(())
}

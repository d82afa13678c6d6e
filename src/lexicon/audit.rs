/*!
 * Post-hoc character-inventory audit of the written lexicon.
 *
 * The auditor re-reads the final table independently of the writer and
 * scans every transcription for symbols that should have been rewritten
 * away: leaked Cyrillic, tie-bar-less affricate sequences, the upstream
 * "nan" sentinel, leftover brackets, and the unconverted schwa. It only
 * reports; a failed audit never rolls back the written file.
 */

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use anyhow::Result;

use crate::file_utils::FileManager;

/// Artifact substrings that must never appear in a final transcription
const FORBIDDEN_SUBSTRINGS: &[(&str, &str)] = &[
    ("ts", "affricate without tie-bar (should be t\u{0361}s)"),
    ("nan", "upstream 'nan' sentinel"),
    ("(", "unremoved opening bracket"),
    (")", "unremoved closing bracket"),
    ("\u{0259}", "unconverted schwa (should be \u{0264})"),
];

/// First code point of the Cyrillic block; nothing at or above it
/// belongs in a phonemic transcription
const CYRILLIC_BLOCK_START: u32 = 0x0400;

/// Outcome of one audit pass
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Number of rows scanned
    pub total_rows: usize,
    /// Per-character frequency over all transcriptions
    pub char_counts: BTreeMap<char, usize>,
    /// Human-readable problems, empty when the table is clean
    pub findings: Vec<String>,
}

impl AuditReport {
    /// Whether the audit found nothing to complain about
    pub fn pass(&self) -> bool {
        self.findings.is_empty()
    }

    /// Character frequencies ordered most-common-first
    pub fn most_common(&self) -> Vec<(char, usize)> {
        let mut counts: Vec<(char, usize)> = self.char_counts.iter().map(|(c, n)| (*c, *n)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts
    }

    /// Render the report as the human-readable text printed to stdout
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(40));
        let _ = writeln!(out, "--- CHARACTER INVENTORY ---");
        let _ = writeln!(out, "Total rows: {}", self.total_rows);
        let _ = writeln!(out, "Unique characters: {}", self.char_counts.len());
        let _ = writeln!(out, "{}", "-".repeat(40));
        for (ch, count) in self.most_common() {
            let _ = writeln!(out, "'{}' (U+{:04X}) : {}", ch, ch as u32, count);
        }
        let _ = writeln!(out, "{}", "=".repeat(40));

        if self.pass() {
            let _ = writeln!(out, "\n[PASS] Lexicon is clean.");
        } else {
            let _ = writeln!(out, "\n[FAIL] Problems detected:");
            for finding in &self.findings {
                let _ = writeln!(out, " - {}", finding);
            }
        }
        out
    }
}

/// Audit already-materialized (word, transcription) rows
pub fn audit_rows(rows: &[(String, String)]) -> AuditReport {
    let mut char_counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut findings = Vec::new();

    for (_, transcription) in rows {
        for ch in transcription.chars() {
            *char_counts.entry(ch).or_insert(0) += 1;
        }
    }

    // Leaked source-script characters
    for ch in char_counts.keys() {
        if (*ch as u32) >= CYRILLIC_BLOCK_START {
            findings.push(format!("Cyrillic character in transcription: '{}' (U+{:04X})", ch, *ch as u32));
        }
    }

    // Known-bad artifact substrings
    for (needle, description) in FORBIDDEN_SUBSTRINGS {
        let hits = rows.iter().filter(|(_, t)| t.contains(needle)).count();
        if hits > 0 {
            findings.push(format!("Found {} ({} rows): '{}'", description, hits, needle));
        }
    }

    AuditReport {
        total_rows: rows.len(),
        char_counts,
        findings,
    }
}

/// Audit the written lexicon file (tab-delimited, no header)
pub fn audit_file<P: AsRef<Path>>(path: P) -> Result<AuditReport> {
    let content = FileManager::read_to_string(path)?;

    let rows: Vec<(String, String)> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut columns = line.splitn(2, '\t');
            let word = columns.next().unwrap_or_default().to_string();
            let transcription = columns.next().unwrap_or_default().to_string();
            (word, transcription)
        })
        .collect();

    Ok(audit_rows(&rows))
}

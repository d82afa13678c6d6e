/*!
 * Source acquisition: download and extraction of the two input tables.
 *
 * The dictionary side is the Kaikki Bulgarian JSONL dump, downloaded
 * once (an existing local copy is never re-fetched) and reduced to a
 * (word, ipa) table. The derived side is a stress-corpus JSONL export
 * reduced to a (word, stressed_word) table via a fixed extraction
 * pattern. Both tables are tab-delimited with a header row.
 */

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use anyhow::{Context, Result};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::file_utils::FileManager;

// @const: Extraction pattern for the stress corpus, e.g. "Дума: вълна (въ`лна)"
static STRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Дума:\s*([^\s(]+)\s*\(([^)]+)\)").unwrap()
});

/// Download a URL to a local file, skipping the download entirely when
/// the file already exists. Streams to a `.part` file first so an
/// interrupted download never masquerades as a complete one.
///
/// Returns true when a download actually happened.
pub async fn download_if_missing<P: AsRef<Path>>(url: &str, dest: P) -> Result<bool> {
    let dest = dest.as_ref();

    if FileManager::file_exists(dest) {
        info!("Already downloaded, skipping: {:?}", dest);
        return Ok(false);
    }

    if let Some(parent) = dest.parent() {
        FileManager::ensure_dir(parent)?;
    }

    info!("Downloading {}", url);
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request failed: {}", url))?
        .error_for_status()
        .with_context(|| format!("Server rejected request: {}", url))?;

    let total_size = response.content_length().unwrap_or(0);
    let progress = ProgressBar::new(total_size);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    progress.set_message("Downloading");

    let partial = dest.with_extension("part");
    let mut file = File::create(&partial)
        .with_context(|| format!("Failed to create {:?}", partial))?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Download stream interrupted")?;
        file.write_all(&chunk)?;
        progress.inc(chunk.len() as u64);
    }
    file.flush()?;
    drop(file);

    std::fs::rename(&partial, dest)
        .with_context(|| format!("Failed to move {:?} into place", partial))?;
    progress.finish_with_message("Downloaded");

    Ok(true)
}

/// Extract (word, ipa) rows from the Kaikki JSONL dump.
///
/// Multi-word phrases are skipped; every `sounds[].ipa` value of a kept
/// entry becomes its own row, with the `/.../` and `[...]` delimiters
/// removed. Broken JSON lines are skipped silently, as the dump is known
/// to contain a few.
pub fn extract_dictionary<P1: AsRef<Path>, P2: AsRef<Path>>(jsonl: P1, table: P2) -> Result<usize> {
    let jsonl = jsonl.as_ref();
    let table = table.as_ref();

    let reader = BufReader::new(
        File::open(jsonl).with_context(|| format!("Failed to open {:?}", jsonl))?,
    );

    let mut out = String::from("word\tipa\n");
    let mut count = 0usize;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let entry: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(_) => continue,
        };

        let word = entry
            .get("word")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim();
        if word.is_empty() || word.contains(' ') {
            continue;
        }

        let Some(sounds) = entry.get("sounds").and_then(Value::as_array) else {
            continue;
        };

        for sound in sounds {
            if let Some(ipa) = sound.get("ipa").and_then(Value::as_str) {
                let ipa = ipa.replace(['/', '[', ']'], "");
                let ipa = ipa.trim();
                if !ipa.is_empty() {
                    out.push_str(word);
                    out.push('\t');
                    out.push_str(ipa);
                    out.push('\n');
                    count += 1;
                }
            }
        }
    }

    FileManager::write_to_file(table, &out)?;
    info!("Extracted {} dictionary records to {:?}", count, table);
    Ok(count)
}

/// Extract (word, stressed_word) rows from a stress-corpus JSONL export.
///
/// Each row's `input` field is matched against the corpus pattern; the
/// first comma/space-separated stressed variant wins and everything is
/// lowercased. Rows without a match contribute nothing.
pub fn extract_stress_corpus<P1: AsRef<Path>, P2: AsRef<Path>>(jsonl: P1, table: P2) -> Result<usize> {
    let jsonl = jsonl.as_ref();
    let table = table.as_ref();

    let reader = BufReader::new(
        File::open(jsonl).with_context(|| format!("Failed to open {:?}", jsonl))?,
    );

    let mut out = String::from("word\tstressed_word\n");
    let mut count = 0usize;
    let mut unmatched = 0usize;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let row: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(_) => continue,
        };

        let text = row.get("input").and_then(Value::as_str).unwrap_or_default();
        let Some(captures) = STRESS_REGEX.captures(text) else {
            unmatched += 1;
            continue;
        };

        let base_word = captures[1].to_lowercase().trim().to_string();
        let stressed_word = captures[2]
            .split(',')
            .next()
            .unwrap_or_default()
            .split(' ')
            .next()
            .unwrap_or_default()
            .to_lowercase()
            .trim()
            .to_string();

        if base_word.is_empty() || stressed_word.is_empty() {
            continue;
        }

        out.push_str(&base_word);
        out.push('\t');
        out.push_str(&stressed_word);
        out.push('\n');
        count += 1;
    }

    if unmatched > 0 {
        debug!("{} corpus rows did not match the extraction pattern", unmatched);
    }
    if count == 0 {
        warn!("No stress records extracted from {:?}", jsonl);
    }

    FileManager::write_to_file(table, &out)?;
    info!("Extracted {} stress records to {:?}", count, table);
    Ok(count)
}

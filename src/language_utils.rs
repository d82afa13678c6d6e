use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for validating the backend voice tag
///
/// eSpeak NG voices are keyed by ISO 639-1 (2-letter) or ISO 639-3
/// (3-letter) language codes, optionally with a variant suffix
/// (e.g. "bg", "en-us"). The pipeline validates the configured tag
/// before handing it to the backend so a typo fails at startup
/// instead of producing an empty phonemization batch.
/// Validate a backend language tag and return its base language
pub fn validate_language_tag(tag: &str) -> Result<Language> {
    let normalized = tag.trim().to_lowercase();

    // Strip an optional variant suffix ("en-us" -> "en")
    let base = normalized.split('-').next().unwrap_or(&normalized);

    if base.len() == 2 {
        if let Some(lang) = Language::from_639_1(base) {
            return Ok(lang);
        }
    } else if base.len() == 3 {
        if let Some(lang) = Language::from_639_3(base) {
            return Ok(lang);
        }
    }

    Err(anyhow!("Invalid backend language tag: {}", tag))
}

/// Get the English display name for a language tag, falling back to the tag itself
pub fn language_display_name(tag: &str) -> String {
    match validate_language_tag(tag) {
        Ok(lang) => lang.to_name().to_string(),
        Err(_) => tag.to_string(),
    }
}

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language code (ISO), also the backend voice tag
    #[serde(default = "default_language")]
    pub language: String,

    /// Source table and output locations
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Phonemization backend config
    #[serde(default)]
    pub backend: BackendConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Phonemization backend type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PhonemizerBackend {
    // @backend: eSpeak NG subprocess
    #[default]
    Espeak,
    // @backend: Fixed-table mock, for tests and dry runs
    Mock,
}

impl PhonemizerBackend {
    // @returns: Capitalized backend name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Espeak => "eSpeak NG",
            Self::Mock => "Mock",
        }
    }
}

impl std::fmt::Display for PhonemizerBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Espeak => write!(f, "espeak"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

impl std::str::FromStr for PhonemizerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "espeak" => Ok(Self::Espeak),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid backend type: {}", s)),
        }
    }
}

/// Source table and output locations
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SourcesConfig {
    // @field: Working directory for downloaded and intermediate files
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    // @field: URL of the Kaikki dictionary JSONL dump
    #[serde(default = "default_dictionary_url")]
    pub dictionary_url: String,

    // @field: Local copy of the dictionary JSONL dump
    #[serde(default = "default_dictionary_jsonl")]
    pub dictionary_jsonl: String,

    // @field: Extracted dictionary table (word, ipa)
    #[serde(default = "default_dictionary_table")]
    pub dictionary_table: String,

    // @field: Local stress-corpus JSONL export
    #[serde(default = "default_stress_jsonl")]
    pub stress_jsonl: String,

    // @field: Extracted stress table (word, stressed_word)
    #[serde(default = "default_stress_table")]
    pub stress_table: String,

    // @field: Final lexicon table
    #[serde(default = "default_lexicon_file")]
    pub lexicon_file: String,
}

impl SourcesConfig {
    /// Resolve a configured file name inside the output directory
    pub fn resolve(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(&self.output_dir).join(path)
        }
    }

    /// Path of the local dictionary JSONL dump
    pub fn dictionary_jsonl_path(&self) -> PathBuf {
        self.resolve(&self.dictionary_jsonl)
    }

    /// Path of the extracted dictionary table
    pub fn dictionary_table_path(&self) -> PathBuf {
        self.resolve(&self.dictionary_table)
    }

    /// Path of the local stress-corpus JSONL export
    pub fn stress_jsonl_path(&self) -> PathBuf {
        self.resolve(&self.stress_jsonl)
    }

    /// Path of the extracted stress table
    pub fn stress_table_path(&self) -> PathBuf {
        self.resolve(&self.stress_table)
    }

    /// Path of the final lexicon table (relative to the working directory, not output_dir)
    pub fn lexicon_path(&self) -> PathBuf {
        PathBuf::from(&self.lexicon_file)
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            dictionary_url: default_dictionary_url(),
            dictionary_jsonl: default_dictionary_jsonl(),
            dictionary_table: default_dictionary_table(),
            stress_jsonl: default_stress_jsonl(),
            stress_table: default_stress_table(),
            lexicon_file: default_lexicon_file(),
        }
    }
}

/// Phonemization backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    // @field: Backend type identifier
    #[serde(rename = "type", default)]
    pub backend_type: PhonemizerBackend,

    // @field: Executable to invoke for the espeak backend
    #[serde(default = "default_backend_command")]
    pub command: String,

    // @field: Keep primary stress marks in transcriptions
    #[serde(default = "default_true")]
    pub with_stress: bool,

    // @field: Trim whitespace from each transcription
    #[serde(default = "default_true")]
    pub strip: bool,

    // @field: Max concurrent backend invocations
    #[serde(default = "default_workers")]
    pub workers: usize,

    // @field: Words per backend invocation chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend_type: PhonemizerBackend::default(),
            command: default_backend_command(),
            with_stress: default_true(),
            strip: default_true(),
            workers: default_workers(),
            chunk_size: default_chunk_size(),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_language() -> String {
    "bg".to_string()
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_dictionary_url() -> String {
    "https://kaikki.org/dictionary/Bulgarian/kaikki.org-dictionary-Bulgarian.jsonl".to_string()
}

fn default_dictionary_jsonl() -> String {
    "bg_kaikki.jsonl".to_string()
}

fn default_dictionary_table() -> String {
    "source_wiktionary_ipa.tsv".to_string()
}

fn default_stress_jsonl() -> String {
    "stress_corpus.jsonl".to_string()
}

fn default_stress_table() -> String {
    "source_chitanka_stress.tsv".to_string()
}

fn default_lexicon_file() -> String {
    "lexicon.tsv".to_string()
}

fn default_backend_command() -> String {
    "espeak-ng".to_string()
}

fn default_true() -> bool {
    true
}

fn default_workers() -> usize {
    4
}

fn default_chunk_size() -> usize {
    64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            sources: SourcesConfig::default(),
            backend: BackendConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("Failed to read config file {:?}: {}", path.as_ref(), e))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path.as_ref(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .map_err(|e| anyhow!("Failed to write config file {:?}: {}", path.as_ref(), e))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        language_utils::validate_language_tag(&self.language)?;

        if self.sources.output_dir.trim().is_empty() {
            return Err(anyhow!("sources.output_dir must not be empty"));
        }
        if self.sources.lexicon_file.trim().is_empty() {
            return Err(anyhow!("sources.lexicon_file must not be empty"));
        }
        if self.backend.workers == 0 {
            return Err(anyhow!("backend.workers must be at least 1"));
        }
        if self.backend.chunk_size == 0 {
            return Err(anyhow!("backend.chunk_size must be at least 1"));
        }

        Ok(())
    }
}

use anyhow::Result;
use log::{error, warn, info, debug};
use std::path::PathBuf;
use std::sync::Arc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::{Config, PhonemizerBackend};
use crate::errors::AppError;
use crate::fetch;
use crate::file_utils::FileManager;
use crate::lexicon::{AlphabetTable, Lexicon, RuleSet};
use crate::lexicon::{audit, writer};
use crate::providers::{BatchPhonemizer, Phonemizer};
use crate::providers::espeak::EspeakBackend;
use crate::providers::mock::MockPhonemizer;
use crate::sources::{SourceKind, SourceRecord, read_source_table};
use crate::errors::SourceError;

// @module: Application controller for the lexicon pipeline

/// Main application controller driving fetch, build, and audit
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Fetch and extract both source tables.
    ///
    /// The dictionary dump is downloaded only when absent. The stress
    /// corpus export is expected as a local JSONL file; a missing export
    /// leaves the derived side empty but does not fail the fetch.
    pub async fn run_fetch(&self) -> Result<()> {
        let sources = &self.config.sources;

        fetch::download_if_missing(&sources.dictionary_url, sources.dictionary_jsonl_path()).await?;
        fetch::extract_dictionary(sources.dictionary_jsonl_path(), sources.dictionary_table_path())?;

        let stress_jsonl = sources.stress_jsonl_path();
        if FileManager::file_exists(&stress_jsonl) {
            fetch::extract_stress_corpus(&stress_jsonl, sources.stress_table_path())?;
        } else {
            warn!(
                "Stress corpus export not found at {:?}; the derived source will be empty",
                stress_jsonl
            );
        }

        Ok(())
    }

    /// Build the lexicon: load both source tables, phonemize the derived
    /// side, merge under dictionary priority, canonicalize the alphabet,
    /// write the sorted table, and audit it.
    pub async fn run_build(&self) -> Result<()> {
        let sources = &self.config.sources;
        let rules = RuleSet::bulgarian();

        // Stage 1: dictionary source (authoritative)
        let dictionary_records =
            self.load_source(sources.dictionary_table_path(), SourceKind::Dictionary);

        // Stage 2: derived source (stress table -> backend)
        let stress_records = self.load_source(sources.stress_table_path(), SourceKind::Derived);

        if dictionary_records.is_empty() && stress_records.is_empty() {
            return Err(AppError::NoSources(
                "neither the dictionary table nor the stress table yielded any records".to_string(),
            )
            .into());
        }

        let derived_records = self.phonemize_stress_records(&stress_records).await;

        // Stage 3: merge, canonicalize, write
        let mut lexicon = Lexicon::merge(&dictionary_records, &derived_records, &rules);
        AlphabetTable.canonicalize(&mut lexicon);

        let lexicon_path = sources.lexicon_path();
        writer::write_tsv(&lexicon, &lexicon_path)?;
        info!(
            "Wrote {} rows for {} words to {:?}",
            lexicon.row_count(),
            lexicon.word_count(),
            lexicon_path
        );

        // Stage 4: post-hoc audit of the file just written. Findings are
        // advisory; the lexicon stays on disk either way.
        self.run_audit(Some(lexicon_path))?;

        Ok(())
    }

    /// Audit a lexicon file and print the report to stdout
    pub fn run_audit(&self, lexicon_path: Option<PathBuf>) -> Result<()> {
        let path = lexicon_path.unwrap_or_else(|| self.config.sources.lexicon_path());

        info!("Auditing {:?}", path);
        let report = audit::audit_file(&path)?;
        println!("{}", report.render());

        if !report.pass() {
            warn!("Audit found {} problem(s); see the report above", report.findings.len());
        }

        Ok(())
    }

    /// Read one source table, treating a missing table as an empty
    /// contribution (partial run) rather than a failure
    fn load_source(&self, path: PathBuf, kind: SourceKind) -> Vec<SourceRecord> {
        match read_source_table(&path, kind) {
            Ok(records) => {
                info!("Loaded {} {:?} records from {:?}", records.len(), kind, path);
                records
            }
            Err(SourceError::NotFound(p)) => {
                warn!("Source table missing, continuing without it: {}", p);
                Vec::new()
            }
            Err(e) => {
                error!("Failed to read source table {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    /// Phonemize the stressed forms and zip the results back to their
    /// base words. Any backend failure drops the whole derived
    /// contribution for this run; dictionary entries are unaffected.
    async fn phonemize_stress_records(&self, stress_records: &[SourceRecord]) -> Vec<SourceRecord> {
        if stress_records.is_empty() {
            return Vec::new();
        }

        let backend = self.build_backend();

        if let Err(e) = backend.test_connection().await {
            error!("Backend {} unavailable, dropping derived source: {}", backend.name(), e);
            return Vec::new();
        }

        let stressed_forms: Vec<String> = stress_records
            .iter()
            .map(|record| record.transcription.clone())
            .collect();

        let progress = ProgressBar::new(0);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} chunks")
                .unwrap()
                .progress_chars("#>-"),
        );
        progress.set_message("Phonemizing");
        let progress_for_callback = progress.clone();

        let batcher = BatchPhonemizer::new(
            backend,
            self.config.backend.workers,
            self.config.backend.chunk_size,
        );

        let result = batcher
            .phonemize_all(&stressed_forms, move |current, total| {
                progress_for_callback.set_length(total as u64);
                progress_for_callback.set_position(current as u64);
            })
            .await;
        progress.finish_and_clear();

        match result {
            Ok(transcriptions) => {
                debug!("Backend produced {} transcriptions", transcriptions.len());
                stress_records
                    .iter()
                    .zip(transcriptions)
                    .map(|(record, transcription)| {
                        SourceRecord::new(&record.word, &transcription, SourceKind::Derived)
                    })
                    .collect()
            }
            Err(e) => {
                error!("Phonemization failed, dropping derived source: {}", e);
                Vec::new()
            }
        }
    }

    /// Build the configured backend
    fn build_backend(&self) -> Arc<dyn Phonemizer> {
        match self.config.backend.backend_type {
            PhonemizerBackend::Espeak => Arc::new(
                EspeakBackend::new(&self.config.language)
                    .with_command(&self.config.backend.command)
                    .with_stress(self.config.backend.with_stress)
                    .with_strip(self.config.backend.strip),
            ),
            PhonemizerBackend::Mock => Arc::new(MockPhonemizer::working()),
        }
    }
}

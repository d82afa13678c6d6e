/*!
 * eSpeak NG backend.
 *
 * Invokes the `espeak-ng` executable once per word with `-q --ipa`,
 * which prints the IPA transcription instead of speaking. Stress marks
 * are part of eSpeak's IPA output; when the backend is configured
 * without stress they are stripped before the result is returned.
 */

use async_trait::async_trait;
use tokio::process::Command;
use log::debug;

use crate::errors::BackendError;
use super::Phonemizer;

/// Default executable name, resolved through PATH
const DEFAULT_COMMAND: &str = "espeak-ng";

/// eSpeak NG subprocess backend
#[derive(Debug, Clone)]
pub struct EspeakBackend {
    /// Executable to invoke
    command: String,

    /// Voice / language tag passed via `-v` (e.g. "bg")
    voice: String,

    /// Keep primary stress marks in the output
    with_stress: bool,

    /// Trim whitespace and newlines from each transcription
    strip: bool,
}

impl EspeakBackend {
    /// Create a backend for the given voice with default options
    pub fn new(voice: &str) -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            voice: voice.to_string(),
            with_stress: true,
            strip: true,
        }
    }

    /// Use a non-default executable path
    pub fn with_command(mut self, command: &str) -> Self {
        self.command = command.to_string();
        self
    }

    /// Keep or strip stress marks
    pub fn with_stress(mut self, with_stress: bool) -> Self {
        self.with_stress = with_stress;
        self
    }

    /// Trim whitespace from each transcription
    pub fn with_strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    /// Phonemize a single written form
    async fn phonemize_word(&self, word: &str) -> Result<String, BackendError> {
        let output = Command::new(&self.command)
            .arg("-q")
            .arg("--ipa")
            .arg("-v")
            .arg(&self.voice)
            .arg("--")
            .arg(word)
            .output()
            .await
            .map_err(|e| BackendError::SpawnFailed(format!("{}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BackendError::ProcessFailed(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| BackendError::DecodeError(e.to_string()))?;

        let mut transcription = if self.strip {
            text.trim().to_string()
        } else {
            text
        };

        if !self.with_stress {
            transcription = transcription.replace(['\u{02c8}', '\u{02cc}'], "");
        }

        Ok(transcription)
    }
}

#[async_trait]
impl Phonemizer for EspeakBackend {
    async fn phonemize(&self, batch: &[String]) -> Result<Vec<String>, BackendError> {
        let mut transcriptions = Vec::with_capacity(batch.len());
        for word in batch {
            transcriptions.push(self.phonemize_word(word).await?);
        }
        debug!("eSpeak transcribed {} words", transcriptions.len());
        Ok(transcriptions)
    }

    async fn test_connection(&self) -> Result<(), BackendError> {
        let output = Command::new(&self.command)
            .arg("--version")
            .output()
            .await
            .map_err(|e| BackendError::Unavailable(format!("{}: {}", self.command, e)))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(BackendError::Unavailable(format!(
                "{} --version exited with {}",
                self.command, output.status
            )))
        }
    }

    fn name(&self) -> &'static str {
        "espeak-ng"
    }
}

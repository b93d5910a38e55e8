use crate::error::{Error, Result};

/// Injected voice capability. The assistant's command dispatch never
/// depends on audio being available; a failed call degrades to text-only.
pub trait SpeechCapability: Send + Sync {
    /// Reads an assistant reply aloud.
    fn speak(&self, text: &str) -> Result<()>;

    /// Captures one utterance of user speech and returns its transcript.
    fn transcribe(&self) -> Result<String>;
}

/// Default capability: silently swallows output, reports input as
/// unavailable.
pub struct NoopSpeech;

impl SpeechCapability for NoopSpeech {
    fn speak(&self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn transcribe(&self) -> Result<String> {
        Err(Error::Speech(
            "no speech capability configured".to_string(),
        ))
    }
}

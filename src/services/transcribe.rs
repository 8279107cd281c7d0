//! Speech-to-text seam. The assistant only sees [`SpeechToText`]; the Whisper HTTP client is
//! one implementation and tests plug in their own.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const WHISPER_ENDPOINT: &str = "https://api.openai.com/v1/audio/transcriptions";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("speech-to-text is not configured")]
    NotConfigured,
    #[error("transcription request failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("transcription service returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("could not decode transcription response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Best-effort transcript of `audio`. `file_name` carries the container extension.
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str)
    -> Result<String, TranscriptionError>;
}

/// Stand-in used when no API key is configured; every call fails.
pub struct DisabledSpeechToText;

#[async_trait]
impl SpeechToText for DisabledSpeechToText {
    async fn transcribe(&self, _: Vec<u8>, _: &str) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::NotConfigured)
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

pub struct WhisperClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    language: String,
}

impl WhisperClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(TranscriptionError::Http)?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            language: language.into(),
        })
    }
}

#[async_trait]
impl SpeechToText for WhisperClient {
    #[tracing::instrument(level = "debug", skip(self, audio), fields(bytes = audio.len(), model = %self.model))]
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        file_name: &str,
    ) -> Result<String, TranscriptionError> {
        let form = Form::new()
            .part("file", Part::bytes(audio).file_name(file_name.to_string()))
            .text("model", self.model.clone())
            .text("language", self.language.clone());

        let response = self
            .client
            .post(WHISPER_ENDPOINT)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(TranscriptionError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TranscriptionResponse =
            response.json().await.map_err(TranscriptionError::Decode)?;
        Ok(parsed.text)
    }
}

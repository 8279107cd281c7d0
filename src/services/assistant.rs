//! Transport-facing entry points. Every inbound event is reduced to a text utterance and run
//! through the shopping core against the sender's session.

use super::transcribe::SpeechToText;
use crate::shopping::{Intent, Reply, SessionStore, dispatch};
use std::sync::Arc;

pub const AUDIO_ERROR_TEXT: &str = "❌ Erro ao processar áudio.";

pub struct Assistant {
    sessions: SessionStore,
    stt: Arc<dyn SpeechToText>,
}

impl Assistant {
    pub fn new(stt: Arc<dyn SpeechToText>) -> Self {
        Self {
            sessions: SessionStore::new(),
            stt,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub async fn on_utterance(&self, user_id: u64, text: &str) -> Option<Reply> {
        let session = self.sessions.get_or_create(user_id).await;
        let mut session = session.lock().await;
        dispatch::handle_utterance(&mut session, text)
    }

    /// Button labels are utterances like any other; exact-match rules pick them up.
    pub async fn on_button_press(&self, user_id: u64, token: &str) -> Option<Reply> {
        self.on_utterance(user_id, token).await
    }

    /// Transcribes and then handles the transcript. The session is not locked while the
    /// transcription is in flight.
    pub async fn on_voice(&self, user_id: u64, audio: Vec<u8>, file_name: &str) -> Option<Reply> {
        match self.stt.transcribe(audio, file_name).await {
            Ok(transcript) => {
                tracing::debug!(target = "stt", user_id, %transcript, "voice transcribed");
                self.on_utterance(user_id, &transcript).await
            }
            Err(e) => {
                tracing::error!(target = "stt", user_id, error = %e, "transcription failed");
                Some(self.voice_failed(user_id).await)
            }
        }
    }

    /// Reply for audio that never reached a transcript (download or STT failure).
    /// The session is left as it was.
    pub async fn voice_failed(&self, user_id: u64) -> Reply {
        let session = self.sessions.get_or_create(user_id).await;
        let keyboard = session.lock().await.mode_keyboard();
        Reply {
            text: AUDIO_ERROR_TEXT.to_string(),
            keyboard,
        }
    }

    /// Greeting for a first contact (or `/start`). Creates the session if needed.
    pub async fn on_start(&self, user_id: u64) -> Reply {
        self.sessions.get_or_create(user_id).await;
        dispatch::welcome()
    }

    /// Slash commands map straight to an intent, bypassing the resolver.
    pub async fn on_command(&self, user_id: u64, intent: Intent) -> Reply {
        let session = self.sessions.get_or_create(user_id).await;
        let mut session = session.lock().await;
        dispatch::apply(&mut session, intent)
    }
}

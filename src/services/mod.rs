pub mod assistant;
pub mod transcribe;

pub use assistant::Assistant;
pub use transcribe::{DisabledSpeechToText, SpeechToText, TranscriptionError, WhisperClient};

use async_trait::async_trait;
use shopping_list_bot::constants::{BTN_ADD, BTN_LIST};
use shopping_list_bot::services::assistant::AUDIO_ERROR_TEXT;
use shopping_list_bot::services::{Assistant, DisabledSpeechToText, SpeechToText, TranscriptionError};
use shopping_list_bot::shopping::{Intent, Keyboard, PendingAction};
use std::sync::Arc;

/// Returns a canned transcript, or fails when none is set.
struct FakeStt(Option<&'static str>);

#[async_trait]
impl SpeechToText for FakeStt {
    async fn transcribe(&self, _: Vec<u8>, _: &str) -> Result<String, TranscriptionError> {
        self.0
            .map(str::to_string)
            .ok_or(TranscriptionError::Api {
                status: 500,
                body: "boom".into(),
            })
    }
}

fn assistant(transcript: Option<&'static str>) -> Assistant {
    Assistant::new(Arc::new(FakeStt(transcript)))
}

#[tokio::test]
async fn voice_transcript_is_handled_like_text() {
    let a = assistant(Some("adicionar café"));
    let reply = a.on_voice(1, vec![0u8; 8], "voice.ogg").await.unwrap();
    assert_eq!(reply.text, "✅ 'café' adicionado!");

    let session = a.sessions().get_or_create(1).await;
    assert!(session.lock().await.items.get("café").is_some());
}

#[tokio::test]
async fn voice_fills_pending_add() {
    let a = assistant(Some("Detergente"));
    a.on_button_press(3, BTN_ADD).await.unwrap();
    let reply = a.on_voice(3, vec![], "voice.ogg").await.unwrap();
    assert_eq!(reply.text, "✅ 'Detergente' adicionado!");
}

#[tokio::test]
async fn transcription_failure_leaves_session_alone() {
    let a = assistant(None);
    a.on_button_press(2, BTN_ADD).await.unwrap();
    let reply = a.on_voice(2, vec![1, 2, 3], "voice.ogg").await.unwrap();
    assert_eq!(reply.text, AUDIO_ERROR_TEXT);
    let session = a.sessions().get_or_create(2).await;
    let session = session.lock().await;
    assert_eq!(session.pending_action, Some(PendingAction::Adding));
    assert!(session.items.is_empty());
}

#[tokio::test]
async fn disabled_stt_reports_audio_error() {
    let a = Assistant::new(Arc::new(DisabledSpeechToText));
    let reply = a.on_voice(9, vec![], "voice.ogg").await.unwrap();
    assert_eq!(reply.text, AUDIO_ERROR_TEXT);
    assert_eq!(reply.keyboard, Keyboard::Normal);
}

#[tokio::test]
async fn users_have_separate_lists() {
    let a = assistant(None);
    a.on_utterance(10, "adicionar leite").await.unwrap();
    a.on_utterance(11, "adicionar ovos").await.unwrap();
    let list = a.on_button_press(10, BTN_LIST).await.unwrap();
    assert!(list.text.contains("leite"));
    assert!(!list.text.contains("ovos"));
    assert_eq!(a.sessions().len().await, 2);
}

#[tokio::test]
async fn slash_commands_apply_intents() {
    let a = assistant(None);
    let welcome = a.on_start(4).await;
    assert_eq!(welcome.keyboard, Keyboard::Normal);
    let reply = a.on_command(4, Intent::EnterShoppingMode).await;
    assert_eq!(reply.keyboard, Keyboard::ShoppingMode);
    let reply = a.on_command(4, Intent::ShowHelp).await;
    assert_eq!(reply.keyboard, Keyboard::ShoppingMode);
    assert!(reply.text.contains("Como usar"));
}

#[tokio::test]
async fn start_shows_main_menu_even_while_shopping() {
    let a = assistant(None);
    a.on_command(6, Intent::EnterShoppingMode).await;
    let welcome = a.on_start(6).await;
    assert_eq!(welcome.keyboard, Keyboard::Normal);
    assert!(welcome.text.contains("assistente de compras"));
}

#[tokio::test]
async fn blank_message_gets_no_reply() {
    let a = assistant(None);
    assert!(a.on_utterance(5, "   ").await.is_none());
}

#[tokio::test]
async fn concurrent_users_do_not_interfere() {
    let a = Arc::new(assistant(None));
    let mut tasks = Vec::new();
    for user in 0..8u64 {
        let a = a.clone();
        tasks.push(tokio::spawn(async move {
            for i in 0..5 {
                a.on_utterance(user, &format!("adicionar item {i}")).await;
            }
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }
    for user in 0..8u64 {
        let session = a.sessions().get_or_create(user).await;
        assert_eq!(session.lock().await.items.len(), 5);
    }
}

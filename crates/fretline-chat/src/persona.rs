//! The guitar tutor persona and the single-question flow.

use fretline_core::Result;
use tracing::debug;

use crate::providers::CompletionProvider;
use crate::types::ChatMessage;

/// Instruction sent as the system turn of every completion.
pub const SYSTEM_PROMPT: &str = "You are a helpful guitar tutor.";

/// Build the two-turn conversation for a (trimmed) question.
pub fn build_messages(question: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(question)]
}

/// Ask the provider one question and return the trimmed answer text.
pub async fn ask(provider: &dyn CompletionProvider, question: &str) -> Result<String> {
    let messages = build_messages(question);
    let content = provider.complete(&messages).await?;
    debug!("Provider answered with {} bytes", content.len());
    Ok(content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use async_trait::async_trait;
    use fretline_core::Error;

    struct Canned(std::result::Result<&'static str, &'static str>);

    #[async_trait]
    impl CompletionProvider for Canned {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String> {
            self.0
                .map(str::to_string)
                .map_err(|e| Error::Provider(e.to_string()))
        }
    }

    #[test]
    fn test_build_messages() {
        let messages = build_messages("How do I tune a guitar?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "You are a helpful guitar tutor.");
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "How do I tune a guitar?");
    }

    #[tokio::test]
    async fn test_ask_trims_answer() {
        let provider = Canned(Ok(" Use standard EADGBE tuning. \n"));
        let answer = ask(&provider, "How do I tune a guitar?").await.unwrap();
        assert_eq!(answer, "Use standard EADGBE tuning.");
    }

    #[tokio::test]
    async fn test_ask_propagates_provider_error() {
        let provider = Canned(Err("timeout"));
        let err = ask(&provider, "Why?").await.unwrap_err();
        assert_eq!(err.to_string(), "timeout");
    }
}

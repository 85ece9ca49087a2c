use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::DomainError;

enum Behaviour {
    Echo,
    Reply(String),
    Fail(String),
}

/// Offline [`ChatClient`] used by `--mock` and by tests.
///
/// With [`MockChatClient::recording`] every prompt it receives is kept, so
/// tests can assert on exactly what would have been sent upstream. Recording
/// is off by default; a long-running `--mock` server keeps nothing.
pub struct MockChatClient {
    behaviour: Behaviour,
    delay: Option<Duration>,
    record: bool,
    prompts: Mutex<Vec<String>>,
}

impl MockChatClient {
    /// Answers with the prompt it was given.
    pub fn echo() -> Self {
        Self::with_behaviour(Behaviour::Echo)
    }

    /// Answers every prompt with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Reply(reply.into()))
    }

    /// Fails every call with an upstream error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Fail(message.into()))
    }

    /// Keep every received prompt for [`MockChatClient::prompts`].
    pub fn recording(mut self) -> Self {
        self.record = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Prompts received so far, oldest first. Always empty unless the client
    /// was built with [`MockChatClient::recording`].
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            delay: None,
            record: false,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::echo()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        if self.record {
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.to_string());
            }
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        debug!("Mock chat client received {} chars", prompt.len());

        match &self.behaviour {
            Behaviour::Echo => Ok(prompt.to_string()),
            Behaviour::Reply(reply) => Ok(reply.clone()),
            Behaviour::Fail(message) => Err(DomainError::upstream(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_returns_prompt() {
        let client = MockChatClient::echo();

        let reply = client.complete("hello world").await.unwrap();

        assert_eq!(reply, "hello world");
    }

    #[tokio::test]
    async fn test_prompts_are_recorded_in_order() {
        let client = MockChatClient::replying("ok").recording();

        client.complete("first").await.unwrap();
        client.complete("second").await.unwrap();

        assert_eq!(client.prompts(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_failing_client_still_records_prompt() {
        let client = MockChatClient::failing("boom").recording();

        let err = client.complete("x").await.unwrap_err();

        assert!(err.is_upstream());
        assert_eq!(client.prompts(), vec!["x"]);
    }

    #[tokio::test]
    async fn test_prompts_are_not_kept_without_recording() {
        let client = MockChatClient::echo();

        for i in 0..1000 {
            client.complete(&format!("prompt {i}")).await.unwrap();
        }

        assert!(client.prompts().is_empty());
    }
}

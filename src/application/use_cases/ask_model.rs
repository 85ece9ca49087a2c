use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{DomainError, Query};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Forwards a [`Query`] to the configured [`ChatClient`].
///
/// No local computation happens here: the formula and prime operations only
/// differ from the generic one by the instruction prefix their mode adds.
pub struct AskModelUseCase {
    client: Arc<dyn ChatClient>,
    timeout: Duration,
}

impl AskModelUseCase {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn execute(&self, query: &Query) -> Result<String, DomainError> {
        let prompt = query.upstream_prompt();

        debug!(
            "Sending {} query ({} chars) to {}",
            query.mode(),
            prompt.chars().count(),
            self.client.name()
        );

        match tokio::time::timeout(self.timeout, self.client.complete(&prompt)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::timeout(format!(
                "{} did not answer within {}s",
                self.client.name(),
                self.timeout.as_secs_f32()
            ))),
        }
    }

    pub async fn query(&self, prompt: &str) -> Result<String, DomainError> {
        self.execute(&Query::generic(prompt)?).await
    }

    pub async fn calculate_formula(&self, formula: &str) -> Result<String, DomainError> {
        self.execute(&Query::formula(formula)?).await
    }

    pub async fn count_primes(&self, range: &str) -> Result<String, DomainError> {
        self.execute(&Query::prime(range)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockChatClient;
    use crate::domain::{FORMULA_INSTRUCTION, PRIME_INSTRUCTION};

    #[tokio::test]
    async fn test_calculate_formula_sends_prefixed_prompt() {
        let client = Arc::new(MockChatClient::echo().recording());
        let use_case = AskModelUseCase::new(client.clone());

        let answer = use_case.calculate_formula("2+2").await.unwrap();

        assert_eq!(answer, format!("{FORMULA_INSTRUCTION}2+2"));
        assert_eq!(client.prompts(), vec![format!("{FORMULA_INSTRUCTION}2+2")]);
    }

    #[tokio::test]
    async fn test_query_and_count_primes_pass_through() {
        let client = Arc::new(MockChatClient::replying("42").recording());
        let use_case = AskModelUseCase::new(client.clone());

        assert_eq!(use_case.query("hello").await.unwrap(), "42");
        assert_eq!(use_case.count_primes("1 to 100").await.unwrap(), "42");
        assert_eq!(
            client.prompts(),
            vec!["hello".to_string(), format!("{PRIME_INSTRUCTION}1 to 100")]
        );
    }

    #[tokio::test]
    async fn test_empty_prompt_never_reaches_client() {
        let client = Arc::new(MockChatClient::echo().recording());
        let use_case = AskModelUseCase::new(client.clone());

        let err = use_case.query("").await.unwrap_err();

        assert!(err.is_invalid_input());
        assert!(client.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_is_propagated() {
        let client = Arc::new(MockChatClient::failing("quota exceeded"));
        let use_case = AskModelUseCase::new(client);

        let err = use_case.query("hello").await.unwrap_err();

        assert!(err.is_upstream());
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_slow_client_times_out() {
        let client = Arc::new(MockChatClient::echo().with_delay(Duration::from_secs(5)));
        let use_case = AskModelUseCase::new(client).with_timeout(Duration::from_millis(20));

        let err = use_case.query("hello").await.unwrap_err();

        assert!(err.is_timeout());
    }
}

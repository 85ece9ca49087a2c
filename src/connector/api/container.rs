use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::application::{AskModelUseCase, ChatClient, DEFAULT_TIMEOUT};
use crate::connector::adapter::{anthropic_client, openai_client};
use crate::domain::DomainError;
use crate::{AnthropicClient, MockChatClient, OpenAiClient};

/// Which upstream API the chat client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    OpenAi,
    Anthropic,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => openai_client::DEFAULT_MODEL,
            Provider::Anthropic => anthropic_client::DEFAULT_MODEL,
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::OpenAi => openai_client::DEFAULT_BASE_URL,
            Provider::Anthropic => anthropic_client::DEFAULT_BASE_URL,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "gpt" => Ok(Provider::OpenAi),
            "anthropic" | "claude" => Ok(Provider::Anthropic),
            other => Err(DomainError::configuration(format!(
                "unknown provider '{other}' (expected openai or anthropic)"
            ))),
        }
    }
}

pub struct ContainerConfig {
    pub provider: Provider,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    /// Upper bound on a single upstream call.
    pub timeout: Duration,
    /// Answer from the offline echo client instead of a real provider.
    pub mock: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            api_key: None,
            model: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            mock: false,
        }
    }
}

/// Holds the process-wide chat client and hands out use cases built on it.
///
/// The client is created once and only read afterwards, so a single
/// `Arc<Container>` can be shared by every request handler.
pub struct Container {
    chat_client: Option<Arc<dyn ChatClient>>,
    timeout: Duration,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        let chat_client: Option<Arc<dyn ChatClient>> = if config.mock {
            debug!("Using mock chat client");
            let client: Arc<dyn ChatClient> = Arc::new(MockChatClient::echo());
            Some(client)
        } else if let Some(key) = api_key {
            let model = config
                .model
                .unwrap_or_else(|| config.provider.default_model().to_string());
            let base_url = config
                .base_url
                .unwrap_or_else(|| config.provider.default_base_url().to_string());

            debug!(
                "Using {} chat client at {} with model {}",
                config.provider, base_url, model
            );

            let client: Arc<dyn ChatClient> = match config.provider {
                Provider::OpenAi => {
                    Arc::new(OpenAiClient::new(key, model, base_url, config.timeout))
                }
                Provider::Anthropic => {
                    Arc::new(AnthropicClient::new(key, model, base_url, config.timeout))
                }
            };
            Some(client)
        } else {
            warn!("No API key configured (set APIKEY); model-backed routes will be unavailable");
            None
        };

        Self {
            chat_client,
            timeout: config.timeout,
        }
    }

    /// Build a container around an already constructed client.
    pub fn with_client(chat_client: Arc<dyn ChatClient>, timeout: Duration) -> Self {
        Self {
            chat_client: Some(chat_client),
            timeout,
        }
    }

    pub fn ask_use_case(&self) -> Result<AskModelUseCase, DomainError> {
        let client = self.chat_client.clone().ok_or_else(|| {
            DomainError::configuration("no API key configured; set the APIKEY environment variable")
        })?;

        Ok(AskModelUseCase::new(client).with_timeout(self.timeout))
    }

    pub fn has_chat_client(&self) -> bool {
        self.chat_client.is_some()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.chat_client.as_deref().map(|c| c.name())
    }
}

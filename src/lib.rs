pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AskModelUseCase, ChatClient, DEFAULT_TIMEOUT};

pub use cli::Commands;

pub use connector::{
    AnthropicClient, Container, ContainerConfig, MockChatClient, OpenAiClient, Provider, Router,
};

pub use domain::{DomainError, Query, QueryMode, FORMULA_INSTRUCTION, PRIME_INSTRUCTION};

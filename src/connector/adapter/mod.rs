pub mod anthropic_client;
mod mock_chat_client;
pub mod openai_client;
mod transport;

pub use anthropic_client::AnthropicClient;
pub use mock_chat_client::*;
pub use openai_client::OpenAiClient;

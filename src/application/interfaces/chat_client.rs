use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a single prompt to an LLM and receiving its text
/// response.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. The use cases (and through them the web handlers) stay decoupled
/// from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as one user message and return the assistant's reply
    /// exactly as the provider produced it.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;

    /// Short provider name used in log lines.
    fn name(&self) -> &str;
}

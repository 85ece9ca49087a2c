use reqwest::Response;
use tracing::warn;

use crate::domain::DomainError;

/// Map a `reqwest` failure onto the domain taxonomy, keeping timeouts apart
/// from every other transport problem.
pub(crate) fn transport_error(provider: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::timeout(format!("{provider}: request timed out: {e}"))
    } else {
        DomainError::upstream(format!("{provider}: request failed: {e}"))
    }
}

/// Pass successful responses through; turn anything else into an upstream
/// error. The response body is logged but not surfaced to the caller.
pub(crate) async fn ensure_success(
    provider: &str,
    response: Response,
) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("{provider}: API returned {status}: {body}");
    Err(DomainError::upstream(format!("{provider}: API returned {status}")))
}

pub(crate) fn http_client(timeout: std::time::Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

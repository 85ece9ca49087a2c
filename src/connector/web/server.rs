use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::routing::{get, MethodRouter};
use tokio::net::TcpListener;
use tracing::info;

use super::forms::{self, PromptForm};
use super::{pages, paths};
use crate::connector::api::Container;
use crate::domain::QueryMode;

#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

/// GET shows the empty form, POST forwards the prompt in `mode`.
fn interactive(mode: QueryMode) -> MethodRouter<AppState> {
    get(move || forms::show_form(mode)).post(
        move |state: State<AppState>, form: Result<Form<PromptForm>, FormRejection>| {
            forms::submit(mode, state, form)
        },
    )
}

pub fn app(container: Arc<Container>) -> axum::Router {
    let mut router = axum::Router::new()
        .route(paths::INDEX, get(pages::index))
        .route(paths::ABOUT, get(pages::about))
        .route(paths::TEAM, get(pages::team))
        .route(paths::FORM, get(pages::form));

    for mode in QueryMode::all() {
        router = router.route(paths::form_path(mode), interactive(mode));
    }

    router
        .fallback(pages::not_found)
        .with_state(AppState::new(container))
}

/// Serve the façade on `addr` until Ctrl-C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(container))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

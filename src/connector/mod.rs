//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Upstream LLM clients (OpenAI, Anthropic, offline mock)
//! - Composition of the process-wide client handle
//! - The HTML web façade served with axum

pub mod adapter;
pub mod api;
pub mod web;

pub use adapter::*;
pub use api::*;

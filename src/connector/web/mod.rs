//! HTML façade: the public pages and the three prompt forms.

mod error;
mod forms;
pub mod html;
mod pages;
pub mod paths;
mod server;

pub use error::{status_for, WebError};
pub use forms::PromptForm;
pub use server::{app, serve, AppState};

//! # panel
//!
//! Client side of the model-downloader sidebar: a per-instance panel context
//! that mirrors server-pushed queue state, validates and dispatches user
//! gestures to the `/downloader/*` backend, and renders its state as text.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns every entity (queue, logs, templates, files, terminal
//! session). This crate never holds authoritative state: snapshots replace the
//! mirror wholesale, and mutating gestures wait for the next push or reload
//! instead of patching locally.

pub mod actions;
pub mod config;
pub mod error;
pub mod net;
pub mod render;
pub mod state;
pub mod util;

pub use actions::{Panel, TemplateFailure, TemplateLoadReport};
pub use config::{Features, PanelConfig};
pub use error::{ActionError, ApiError, ConfigError, ValidationError};
pub use net::api::ApiClient;
pub use net::events::EventStream;
pub use state::panel::{PanelEvent, PanelState};

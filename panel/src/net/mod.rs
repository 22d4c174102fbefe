//! Transport to the downloader backend.
//!
//! `api` issues one request per gesture over HTTP. `events` reads the host's
//! push channel. Neither retries, times out, or cancels on its own.

pub mod api;
pub mod events;

//! Push-event stream over the host websocket.
//!
//! The host multiplexes its own traffic on the same socket. Binary frames
//! (preview images) and foreign events pass through here; undecodable text is
//! logged and skipped so one bad message never ends the stream.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{info, warn};
use wire::PushEvent;

use crate::error::ApiError;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Fresh client id for the push channel.
#[must_use]
pub fn new_client_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Websocket URL for `base_url` (`http` becomes `ws`, `https` becomes `wss`).
///
/// # Errors
///
/// Returns [`ApiError::InvalidBaseUrl`] for any other scheme.
pub fn ws_url(base_url: &str, client_id: &str) -> Result<String, ApiError> {
    let base = base_url.trim_end_matches('/');
    let client_id = urlencoding::encode(client_id);
    if let Some(rest) = base.strip_prefix("http://") {
        return Ok(format!("ws://{rest}/ws?clientId={client_id}"));
    }
    if let Some(rest) = base.strip_prefix("https://") {
        return Ok(format!("wss://{rest}/ws?clientId={client_id}"));
    }
    Err(ApiError::InvalidBaseUrl(base_url.to_owned()))
}

pub struct EventStream {
    socket: Socket,
}

impl EventStream {
    /// Open the push channel for `client_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the URL is invalid or the handshake fails.
    pub async fn connect(base_url: &str, client_id: &str) -> Result<Self, ApiError> {
        let url = ws_url(base_url, client_id)?;
        let (socket, _response) = tokio_tungstenite::connect_async(url.as_str()).await?;
        info!(%url, "push channel connected");
        Ok(Self { socket })
    }

    /// Next decoded push event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::WsClosed`] once the socket closes, or
    /// [`ApiError::WebSocket`] on a protocol failure.
    pub async fn next_event(&mut self) -> Result<PushEvent, ApiError> {
        loop {
            let Some(message) = self.socket.next().await else {
                return Err(ApiError::WsClosed);
            };
            match message? {
                Message::Text(text) => match wire::decode_event(text.as_str()) {
                    Ok(event) => return Ok(event),
                    Err(error) => warn!(%error, "dropping undecodable push event"),
                },
                Message::Close(_) => return Err(ApiError::WsClosed),
                _ => {}
            }
        }
    }

    /// Close the socket.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::WebSocket`] when the close handshake fails.
    pub async fn close(mut self) -> Result<(), ApiError> {
        self.socket.close(None).await?;
        Ok(())
    }
}

// ABOUTME: Transport between the reconciler and the column resize front-end.
// ABOUTME: JSON component arguments and values carried over async channels.

pub mod channel;
pub mod message;

pub use channel::{ChannelResizeSource, Envelope, FrontendHandle};
pub use message::{ComponentArgs, ComponentValue, WireConfig};

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Front-end channel closed")]
    ChannelClosed,
}

// ABOUTME: Channel-backed resize source for front-ends driven by another event loop.
// ABOUTME: Publishes component arguments and hands each instance's latest report out once.

use std::collections::HashMap;

use colsplit_layout::{ResizeRequest, ResizeSource};
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use crate::{BridgeError, ComponentArgs, ComponentValue};

/// A JSON payload addressed to one widget instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub key: String,
    pub payload: String,
}

/// Reconciler side of the channel pair
pub struct ChannelResizeSource {
    args_tx: UnboundedSender<Envelope>,
    values_rx: UnboundedReceiver<Envelope>,
    latest: HashMap<String, Vec<f64>>,
}

/// Front-end side of the channel pair
pub struct FrontendHandle {
    args_rx: UnboundedReceiver<Envelope>,
    values_tx: UnboundedSender<Envelope>,
}

impl ChannelResizeSource {
    pub fn pair() -> (Self, FrontendHandle) {
        let (args_tx, args_rx) = mpsc::unbounded_channel();
        let (values_tx, values_rx) = mpsc::unbounded_channel();
        (
            Self {
                args_tx,
                values_rx,
                latest: HashMap::new(),
            },
            FrontendHandle { args_rx, values_tx },
        )
    }

    /// Pull every value the front-end has sent since the last render
    fn drain(&mut self) {
        loop {
            match self.values_rx.try_recv() {
                Ok(envelope) => match ComponentValue::from_json(&envelope.payload) {
                    Ok(value) => {
                        self.latest.insert(envelope.key, value.widths);
                    }
                    Err(e) => {
                        tracing::warn!("Dropping value for {}: {}", envelope.key, e);
                    }
                },
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::debug!("Front-end value channel disconnected");
                    break;
                }
            }
        }
    }

    fn publish(&self, key: &str, request: &ResizeRequest, default: &[f64]) -> Result<(), BridgeError> {
        let payload = ComponentArgs::new(request, default).to_json()?;
        self.args_tx
            .send(Envelope {
                key: key.to_string(),
                payload,
            })
            .map_err(|_| BridgeError::ChannelClosed)
    }
}

impl ResizeSource for ChannelResizeSource {
    fn request_resize(
        &mut self,
        key: &str,
        request: &ResizeRequest,
        default: &[f64],
    ) -> Option<Vec<f64>> {
        if let Err(e) = self.publish(key, request, default) {
            tracing::warn!("Could not publish arguments for {}: {}", key, e);
        }
        self.drain();
        // A report is consumed by the render that merges it; persisted state owns it afterwards.
        self.latest.remove(key)
    }
}

impl FrontendHandle {
    /// Report a finished drag for one instance
    pub fn report(&self, key: &str, widths: &[f64]) -> Result<(), BridgeError> {
        let payload = ComponentValue::resize(widths.to_vec()).to_json()?;
        self.send_raw(key, payload)
    }

    /// Send an already-encoded value
    pub fn send_raw(&self, key: &str, payload: impl Into<String>) -> Result<(), BridgeError> {
        self.values_tx
            .send(Envelope {
                key: key.to_string(),
                payload: payload.into(),
            })
            .map_err(|_| BridgeError::ChannelClosed)
    }

    /// Next published render request, if one is waiting
    pub fn try_next_args(&mut self) -> Option<Result<(String, ComponentArgs), BridgeError>> {
        let envelope = self.args_rx.try_recv().ok()?;
        Some(ComponentArgs::from_json(&envelope.payload).map(|args| (envelope.key, args)))
    }

    /// Wait for the next render request
    pub async fn next_args(&mut self) -> Option<Result<(String, ComponentArgs), BridgeError>> {
        let envelope = self.args_rx.recv().await?;
        Some(ComponentArgs::from_json(&envelope.payload).map(|args| (envelope.key, args)))
    }
}

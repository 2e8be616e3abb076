//! Round link runtime integration.
//!
//! Bridges the synchronous UI loop with the async round service. Each request is
//! spawned as its own task; replies come back in arrival order and are drained by
//! the loop once per frame. Nothing is cancelled once sent.

use std::io;
use std::sync::Arc;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::debug;

use crate::service::{dispatch, RoundReply, RoundRequest, RoundService};

/// Running link to the round service.
pub struct RoundLink {
    _rt: Runtime,
    req_tx: mpsc::UnboundedSender<RoundRequest>,
    reply_rx: mpsc::UnboundedReceiver<RoundReply>,
}

impl RoundLink {
    pub fn start(service: Arc<dyn RoundService>) -> io::Result<Self> {
        let (req_tx, mut req_rx) = mpsc::unbounded_channel::<RoundRequest>();
        let (reply_tx, reply_rx) = mpsc::unbounded_channel::<RoundReply>();

        let rt = Runtime::new()?;
        rt.spawn(async move {
            while let Some(request) = req_rx.recv().await {
                debug!(action = request.action().as_str(), "request dispatched");
                let service = Arc::clone(&service);
                let reply_tx = reply_tx.clone();
                tokio::spawn(async move {
                    let reply = dispatch(service.as_ref(), request).await;
                    let _ = reply_tx.send(reply);
                });
            }
        });

        Ok(Self {
            _rt: rt,
            req_tx,
            reply_rx,
        })
    }

    /// Queue a request. Returns false if the worker is gone.
    pub fn send(&self, request: RoundRequest) -> bool {
        self.req_tx.send(request).is_ok()
    }

    pub fn try_recv(&mut self) -> Option<RoundReply> {
        self.reply_rx.try_recv().ok()
    }
}

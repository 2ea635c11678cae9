//! The host context: one task owning the privileged handlers.
//!
//! Requests arrive over an unbounded queue. Each invoke runs on its own
//! spawned task and answers over a oneshot, so replies resolve in the order
//! handlers finish. Notifications are handled inline, in arrival order.

use std::sync::Arc;

use async_trait::async_trait;
use porthole_common::{BridgeError, HandlerError, RequestId};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::channel::Channel;
use crate::records::{AppInfo, DialogOutcome, DialogRequest, SystemInfo};

/// One handler per bridge operation.
#[async_trait]
pub trait HostHandlers: Send + Sync {
    /// `notify-host`. No reply is sent back through the bridge.
    async fn notify(&self, text: String);

    /// `get-app-info`.
    async fn get_app_info(&self) -> Result<AppInfo, HandlerError>;

    /// `get-system-info`.
    async fn get_system_info(&self) -> Result<SystemInfo, HandlerError>;

    /// `show-dialog`. `Ok(None)` when there is no window to attach to.
    async fn show_dialog(
        &self,
        request: DialogRequest,
    ) -> Result<Option<DialogOutcome>, HandlerError>;
}

/// A request that already passed the allow-list.
#[derive(Debug)]
pub(crate) struct Request {
    pub id: RequestId,
    pub channel: Channel,
    pub args: Vec<Value>,
}

impl Request {
    pub(crate) fn new(channel: Channel, args: Vec<Value>) -> Self {
        Self {
            id: RequestId::new(),
            channel,
            args,
        }
    }
}

type Reply = oneshot::Sender<Result<Value, BridgeError>>;

enum HostMessage {
    Invoke(Request, Reply),
    Notify(String),
}

/// Sending half of the host queue. Cloned into every [`crate::Bridge`].
#[derive(Clone)]
pub struct HostLink {
    tx: mpsc::UnboundedSender<HostMessage>,
}

impl HostLink {
    pub(crate) async fn invoke(&self, request: Request) -> Result<Value, BridgeError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(HostMessage::Invoke(request, reply_tx))
            .map_err(|_| BridgeError::HostUnavailable)?;
        reply_rx.await.map_err(|_| BridgeError::HostUnavailable)?
    }

    /// Returns `false` when the host has shut down.
    pub(crate) fn notify(&self, text: String) -> bool {
        self.tx.send(HostMessage::Notify(text)).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving half plus the handlers. Drive it with [`HostRuntime::run`] on
/// a tokio runtime.
pub struct HostRuntime {
    rx: mpsc::UnboundedReceiver<HostMessage>,
    handlers: Arc<dyn HostHandlers>,
}

impl HostRuntime {
    pub fn new(handlers: Arc<dyn HostHandlers>) -> (HostLink, HostRuntime) {
        let (tx, rx) = mpsc::unbounded_channel();
        (HostLink { tx }, HostRuntime { rx, handlers })
    }

    /// Process messages until every [`HostLink`] is dropped.
    pub async fn run(mut self) {
        tracing::info!("host context started");
        while let Some(message) = self.rx.recv().await {
            match message {
                HostMessage::Invoke(request, reply) => {
                    let handlers = Arc::clone(&self.handlers);
                    tokio::spawn(async move {
                        let id = request.id.clone();
                        let channel = request.channel;
                        let result = dispatch(handlers.as_ref(), request).await;
                        match &result {
                            Ok(_) => tracing::debug!(request_id = %id, %channel, "invoke resolved"),
                            Err(e) => {
                                tracing::warn!(request_id = %id, %channel, error = %e, "invoke rejected")
                            }
                        }
                        if reply.send(result).is_err() {
                            tracing::debug!(request_id = %id, "caller went away before reply");
                        }
                    });
                }
                HostMessage::Notify(text) => {
                    tracing::info!(body_len = text.len(), "notify-host received");
                    self.handlers.notify(text).await;
                }
            }
        }
        tracing::info!("host context stopped");
    }
}

async fn dispatch(handlers: &dyn HostHandlers, request: Request) -> Result<Value, BridgeError> {
    let channel = request.channel;
    let result = match channel {
        Channel::GetAppInfo => handlers.get_app_info().await.and_then(to_json),
        Channel::GetSystemInfo => handlers.get_system_info().await.and_then(to_json),
        Channel::ShowDialog => match DialogRequest::from_args(&request.args) {
            Ok(dialog) => handlers.show_dialog(dialog).await.and_then(to_json),
            Err(e) => Err(e),
        },
        Channel::NotifyHost | Channel::HostToPresentation => {
            return Err(BridgeError::InvalidChannel(channel.name().to_string()));
        }
    };
    result.map_err(|e| BridgeError::HandlerFailure {
        channel: channel.name().to_string(),
        message: e.to_string(),
    })
}

fn to_json<T: Serialize>(value: T) -> Result<Value, HandlerError> {
    serde_json::to_value(value).map_err(|e| HandlerError::new(format!("serialize result: {e}")))
}

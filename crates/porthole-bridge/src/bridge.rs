//! The presentation-facing surface.

use porthole_common::BridgeError;
use serde_json::Value;

use crate::channel::Channel;
use crate::host::{HostLink, Request};
use crate::notify::{NotificationHub, Subscription};

/// Everything the presentation context is allowed to do.
///
/// There is no generic send: `invoke` parses its name against the channel
/// allow-list before anything is queued for the host.
#[derive(Clone)]
pub struct Bridge {
    host: HostLink,
    notifications: NotificationHub,
}

impl Bridge {
    pub fn new(host: HostLink, notifications: NotificationHub) -> Self {
        Self {
            host,
            notifications,
        }
    }

    /// Send a request and wait for its single response.
    pub async fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value, BridgeError> {
        let channel = match Channel::invokable(name) {
            Ok(channel) => channel,
            Err(e) => {
                tracing::warn!(channel = name, "blocked invoke on channel not in allow-list");
                return Err(e);
            }
        };
        let request = Request::new(channel, args);
        tracing::debug!(
            request_id = %request.id,
            %channel,
            args = request.args.len(),
            "invoke forwarded"
        );
        self.host.invoke(request).await
    }

    /// Fire-and-forget text to the host on `notify-host`.
    pub fn notify(&self, text: impl Into<String>) {
        let text = text.into();
        let len = text.len();
        if !self.host.notify(text) {
            tracing::debug!(body_len = len, "notify-host dropped, host context gone");
        }
    }

    /// Subscribe to `host-to-presentation` pushes.
    pub fn on_host_message<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.notifications.subscribe(callback)
    }

    /// Host OS identifier (`linux`, `macos`, `windows`, ...).
    pub fn platform(&self) -> &'static str {
        std::env::consts::OS
    }
}

//! Internal types and constants for the app state module.

use std::sync::Arc;
use std::time::Duration;

use porthole_bridge::Subscription;
use porthole_common::BridgeError;
use porthole_webview::{WebViewHandle, WebViewManager};
use serde_json::Value;
use winit::window::Window;

/// How often to poll for events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Work produced off the main thread that must reach the WebView.
pub(super) enum HostOutbound {
    /// Answer for invoke `id` issued by page load `generation`.
    Settle {
        generation: u64,
        id: u64,
        result: Result<Value, BridgeError>,
    },
    /// A `host-to-presentation` push.
    Deliver(String),
}

/// The main window and everything attached to it.
pub(super) struct MainWindow {
    pub webview: WebViewHandle,
    pub webviews: WebViewManager,
    /// Forwards hub pushes into the page while the window lives.
    pub subscription: Option<Subscription>,
    /// Whether the window has been made visible.
    pub shown: bool,
    pub devtools_opened: bool,
    pub window: Arc<Window>,
}

impl MainWindow {
    /// Stop forwarding pushes, then drop the WebView before its window.
    pub fn teardown(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        drop(self.webview);
        drop(self.window);
    }
}

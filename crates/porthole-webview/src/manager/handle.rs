use porthole_common::BridgeError;
use serde_json::Value;
use wry::WebView;

use crate::ipc::{js_deliver, js_settle};

/// Handle to the managed WebView.
pub struct WebViewHandle {
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Resolve or reject the page's pending invoke `id`.
    pub fn settle(&self, id: u64, result: &Result<Value, BridgeError>) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&js_settle(id, result))
    }

    /// Push text to the page's `onHostMessage` subscribers.
    pub fn deliver(&self, text: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&js_deliver(text))
    }

    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }
}

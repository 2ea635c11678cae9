//! WebView layer for the Porthole window.
//!
//! Wraps the `wry` crate to provide:
//! - One managed WebView filling the main window
//! - The injected `window.porthole` bridge and its wire format
//! - A `porthole://` custom protocol serving the bundled front-end
//! - A navigation allow-list
//! - Page-load and IPC events queued for the main loop

pub mod bounds;
pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod navigation;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::InboundMessage;
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use navigation::NavigationPolicy;

/// Custom protocol scheme for bundled content.
pub const SCHEME: &str = "porthole";

/// URL of `entry` inside the bundle, in the form the platform webview
/// expects for custom protocols.
pub fn bundle_url(entry: &str) -> String {
    let entry = entry.trim_start_matches('/');
    if cfg!(target_os = "windows") {
        format!("http://{SCHEME}.localhost/{entry}")
    } else {
        format!("{SCHEME}://localhost/{entry}")
    }
}

/// Version string of the platform webview engine.
pub fn engine_version() -> Result<String, wry::Error> {
    wry::webview_version()
}

//! WebView lifecycle management.
//!
//! `WebViewManager` builds the `wry::WebView` for the main window and
//! collects its events for the main loop.

use std::sync::{Arc, Mutex, PoisonError};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;
use crate::navigation::NavigationPolicy;

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Owns the shared event sink and the policies attached to every WebView.
pub struct WebViewManager {
    /// Event sink. Handlers push here; the main loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Content provider for the `porthole://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
    navigation: Arc<NavigationPolicy>,
}

impl WebViewManager {
    pub fn new(navigation: NavigationPolicy) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
            navigation: Arc::new(navigation),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new(NavigationPolicy::new())
    }
}

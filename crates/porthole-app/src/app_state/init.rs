//! Window and WebView creation.

use std::sync::mpsc;
use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use porthole_bridge::NotificationHub;
use porthole_common::PlatformError;
use porthole_config::colors::parse_hex_rgba;
use porthole_config::schema::WindowConfig;
use porthole_config::RunMode;
use porthole_webview::bounds::fill_bounds;
use porthole_webview::{ContentProvider, WebViewConfig, WebViewManager};

use crate::load_target::LoadTarget;

use super::core::PortholeApp;
use super::types::{HostOutbound, MainWindow};

/// Borrowed pieces of app state needed to build a window.
struct WindowFactory<'a> {
    window: &'a WindowConfig,
    target: &'a LoadTarget,
    run_mode: RunMode,
    notifications: &'a NotificationHub,
    outbox: &'a mpsc::Sender<HostOutbound>,
}

impl WindowFactory<'_> {
    fn create(&self, event_loop: &ActiveEventLoop) -> Result<MainWindow, PlatformError> {
        let wc = self.window;
        let attrs = WindowAttributes::default()
            .with_title(wc.title.clone())
            .with_inner_size(LogicalSize::new(wc.width as f64, wc.height as f64))
            .with_min_inner_size(LogicalSize::new(wc.min_width as f64, wc.min_height as f64))
            .with_visible(!wc.show_when_ready);

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PlatformError::WindowError(e.to_string()))?;

        let mut webviews = WebViewManager::new(self.target.navigation_policy());
        if let LoadTarget::Bundle { dir, entry } = self.target {
            if !dir.is_dir() {
                tracing::warn!(
                    path = %dir.display(),
                    "Bundle directory not found, the page will fail to load"
                );
            }
            webviews.set_content_provider(ContentProvider::new(dir, entry.clone()));
        }

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let mut config = WebViewConfig::with_url(self.target.url());
        config.devtools = self.run_mode.is_development();
        config.background = parse_hex_rgba(&wc.background);

        let webview = webviews
            .create(window.as_ref(), fill_bounds(size.width, size.height), config)
            .map_err(|e| PlatformError::WebViewError(e.to_string()))?;

        let outbox = self.outbox.clone();
        let subscription = self.notifications.subscribe(move |text| {
            let _ = outbox.send(HostOutbound::Deliver(text.to_string()));
        });

        Ok(MainWindow {
            webview,
            webviews,
            subscription: Some(subscription),
            shown: !wc.show_when_ready,
            devtools_opened: false,
            window,
        })
    }
}

impl PortholeApp {
    /// Make sure the main window exists.
    /// Returns `false` if there is no window and none could be created.
    pub(super) fn activate_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let factory = WindowFactory {
            window: &self.config.window,
            target: &self.target,
            run_mode: self.run_mode,
            notifications: &self.notifications,
            outbox: &self.outbox_tx,
        };

        match self.lifecycle.activate(|| factory.create(event_loop)) {
            Ok(true) => {
                let window = self.lifecycle.get().map(|main| Arc::clone(&main.window));
                self.dialog_parent.set(window);
                tracing::info!(url = %self.target.url(), "Main window created");
                true
            }
            Ok(false) => true,
            Err(e) => {
                tracing::error!("Failed to create main window: {e}");
                false
            }
        }
    }

    /// Close the main window, if any.
    pub(super) fn close_window(&mut self) {
        self.dialog_parent.set(None);
        if let Some(main) = self.lifecycle.close() {
            main.teardown();
            tracing::info!("Main window closed");
        }
    }

    /// Resize the WebView to fill the window.
    pub(super) fn sync_webview_bounds(&self) {
        if let Some(main) = self.lifecycle.get() {
            let size = main
                .window
                .inner_size()
                .to_logical::<f64>(main.window.scale_factor());
            if let Err(e) = main.webview.set_bounds(fill_bounds(size.width, size.height)) {
                tracing::warn!(error = %e, "Failed to resize webview");
            }
        }
    }
}

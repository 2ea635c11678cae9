//! Graceful shutdown: close the window, stop the host, drop the runtime.

use std::time::Duration;

use super::core::PortholeApp;

impl PortholeApp {
    /// Perform graceful shutdown. Safe to call more than once.
    ///
    /// Order matters:
    /// 1. Close the window (stop forwarding pushes, destroy the webview)
    /// 2. Drop the bridge so the host queue closes
    /// 3. Shut down the tokio runtime
    pub(super) fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        tracing::info!("Initiating graceful shutdown");

        self.close_window();

        self.bridge = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }

    /// The main window is the only window, so closing it ends the app on
    /// every platform. winit 0.30 gives no dock-reopen event to recreate it
    /// from on macOS.
    pub(super) fn on_last_window_closed(&mut self) {
        self.close_window();
        self.shutdown();
    }
}

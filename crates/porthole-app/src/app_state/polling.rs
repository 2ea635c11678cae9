//! Polling for WebView events and host replies.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use porthole_webview::{PageLoadState, WebViewEvent};

use super::core::PortholeApp;
use super::types::{HostOutbound, POLL_INTERVAL};

impl PortholeApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_host_outbox();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        let events = match self.lifecycle.get() {
            Some(main) => main.webviews.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::PageLoad {
                    state: PageLoadState::Finished,
                    url,
                } => self.on_page_ready(&url),
                WebViewEvent::PageLoad {
                    state: PageLoadState::Started,
                    url,
                } => self.begin_page_load(&url),
                WebViewEvent::IpcMessage { body } => self.handle_ipc_message(&body),
            }
        }
    }

    /// A new document replaces the page, along with its pending invokes.
    pub(super) fn begin_page_load(&mut self, url: &str) {
        self.page_generation += 1;
        tracing::debug!(url, generation = self.page_generation, "page load started");
    }

    /// First finished load shows the window; development mode also opens
    /// devtools once.
    fn on_page_ready(&mut self, url: &str) {
        let devtools = self.run_mode.is_development() && self.config.load.devtools_in_development;
        let Some(main) = self.lifecycle.get_mut() else {
            return;
        };

        if !main.shown {
            main.window.set_visible(true);
            main.window.focus_window();
            main.shown = true;
            tracing::info!(url, "Page ready, window shown");
        }

        if devtools && !main.devtools_opened {
            main.webview.open_devtools();
            main.devtools_opened = true;
        }
    }

    /// Forward host replies and pushes into the page.
    pub(super) fn poll_host_outbox(&self) {
        while let Ok(outbound) = self.outbox_rx.try_recv() {
            if self.is_stale(&outbound) {
                continue;
            }
            let Some(main) = self.lifecycle.get() else {
                tracing::debug!("Dropping host message: no window");
                continue;
            };
            let sent = match &outbound {
                HostOutbound::Settle { id, result, .. } => main.webview.settle(*id, result),
                HostOutbound::Deliver(text) => main.webview.deliver(text),
            };
            if let Err(e) = sent {
                tracing::warn!(error = %e, "Failed to reach webview");
            }
        }
    }

    /// A settle whose page has since been replaced. Its id may already
    /// belong to a request from the new page.
    pub(super) fn is_stale(&self, outbound: &HostOutbound) -> bool {
        match outbound {
            HostOutbound::Settle { generation, id, .. } if *generation != self.page_generation => {
                tracing::debug!(
                    id,
                    generation,
                    current = self.page_generation,
                    "Dropping reply for a previous page"
                );
                true
            }
            _ => false,
        }
    }
}

//! IPC message parsing and forwarding from the page to the bridge.

use porthole_common::BridgeError;
use porthole_webview::InboundMessage;

use super::core::PortholeApp;
use super::types::HostOutbound;

impl PortholeApp {
    /// Handle a single IPC message from the page.
    pub(super) fn handle_ipc_message(&self, body: &str) {
        let msg = match InboundMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
                return;
            }
        };

        let (bridge, rt) = match (&self.bridge, &self.tokio_runtime) {
            (Some(bridge), Some(rt)) => (bridge.clone(), rt),
            _ => {
                tracing::warn!("IPC message while the host is stopped");
                if let InboundMessage::Invoke { id, .. } = msg {
                    let _ = self.outbox_tx.send(HostOutbound::Settle {
                        generation: self.page_generation,
                        id,
                        result: Err(BridgeError::HostUnavailable),
                    });
                }
                return;
            }
        };

        match msg {
            InboundMessage::Notify { text } => bridge.notify(text),
            InboundMessage::Invoke { id, channel, args } => {
                tracing::debug!(id, channel = %channel, "IPC invoke");
                let outbox = self.outbox_tx.clone();
                let generation = self.page_generation;
                rt.spawn(async move {
                    let result = bridge.invoke(&channel, args).await;
                    let _ = outbox.send(HostOutbound::Settle {
                        generation,
                        id,
                        result,
                    });
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use porthole_config::{PortholeConfig, RunMode};
    use serde_json::Value;

    use super::*;
    use crate::load_target::LoadTarget;

    fn app() -> PortholeApp {
        PortholeApp::new(
            PortholeConfig::default(),
            RunMode::Packaged,
            LoadTarget::DevServer {
                url: "http://localhost:8080".into(),
            },
            "test".into(),
        )
        .unwrap()
    }

    fn next_outbound(app: &PortholeApp) -> HostOutbound {
        app.outbox_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("host reply")
    }

    #[test]
    fn invoke_settles_with_value() {
        let mut app = app();
        app.handle_ipc_message(r#"{"kind":"invoke","id":1,"channel":"get-app-info","args":[]}"#);
        match next_outbound(&app) {
            HostOutbound::Settle { id, result, .. } => {
                assert_eq!(id, 1);
                let value = result.unwrap();
                assert_eq!(value["name"], "Porthole");
                assert_eq!(value["webviewVersion"], "test");
            }
            HostOutbound::Deliver(_) => panic!("expected a settle"),
        }
        app.shutdown();
    }

    #[test]
    fn invoke_unknown_channel_settles_with_error() {
        let mut app = app();
        app.handle_ipc_message(r#"{"kind":"invoke","id":9,"channel":"open-url","args":["x"]}"#);
        match next_outbound(&app) {
            HostOutbound::Settle { id, result, .. } => {
                assert_eq!(id, 9);
                assert_eq!(result, Err(BridgeError::InvalidChannel("open-url".into())));
            }
            HostOutbound::Deliver(_) => panic!("expected a settle"),
        }
        app.shutdown();
    }

    #[test]
    fn dialog_without_window_settles_null() {
        let mut app = app();
        app.handle_ipc_message(
            r#"{"kind":"invoke","id":2,"channel":"show-dialog","args":["T","M"]}"#,
        );
        match next_outbound(&app) {
            HostOutbound::Settle { result, .. } => assert_eq!(result, Ok(Value::Null)),
            HostOutbound::Deliver(_) => panic!("expected a settle"),
        }
        app.shutdown();
    }

    #[test]
    fn notify_without_window_sends_nothing_back() {
        let mut app = app();
        app.handle_ipc_message(r#"{"kind":"notify","text":"hi"}"#);
        app.handle_ipc_message(r#"{"kind":"invoke","id":3,"channel":"get-app-info"}"#);
        // The invoke queues behind the notify; only its settle arrives.
        assert!(matches!(
            next_outbound(&app),
            HostOutbound::Settle { id: 3, .. }
        ));
        assert!(app.outbox_rx.try_recv().is_err());
        app.shutdown();
    }

    #[test]
    fn malformed_body_is_ignored() {
        let mut app = app();
        app.handle_ipc_message("not json");
        app.handle_ipc_message(r#"{"kind":"eval","code":"1"}"#);
        let deadline = Instant::now() + Duration::from_millis(100);
        while Instant::now() < deadline {
            assert!(app.outbox_rx.try_recv().is_err());
            std::thread::sleep(Duration::from_millis(10));
        }
        app.shutdown();
    }

    #[test]
    fn reply_for_replaced_page_is_dropped() {
        let mut app = app();
        app.handle_ipc_message(r#"{"kind":"invoke","id":1,"channel":"get-app-info"}"#);
        let old_reply = next_outbound(&app);
        assert!(!app.is_stale(&old_reply));

        app.begin_page_load("porthole://localhost/index.html");
        assert!(app.is_stale(&old_reply));

        // The reloaded page reuses id 1; its own reply goes through.
        app.handle_ipc_message(r#"{"kind":"invoke","id":1,"channel":"get-app-info"}"#);
        let new_reply = next_outbound(&app);
        assert!(matches!(
            new_reply,
            HostOutbound::Settle { generation: 1, id: 1, .. }
        ));
        assert!(!app.is_stale(&new_reply));
        app.shutdown();
    }

    #[test]
    fn deliveries_are_never_stale() {
        let mut app = app();
        app.begin_page_load("porthole://localhost/index.html");
        assert!(!app.is_stale(&HostOutbound::Deliver("hello".into())));
        app.shutdown();
    }

    #[test]
    fn invoke_after_shutdown_is_host_unavailable() {
        let mut app = app();
        app.shutdown();
        app.handle_ipc_message(r#"{"kind":"invoke","id":4,"channel":"get-app-info"}"#);
        match next_outbound(&app) {
            HostOutbound::Settle { id, result, .. } => {
                assert_eq!(id, 4);
                assert_eq!(result, Err(BridgeError::HostUnavailable));
            }
            HostOutbound::Deliver(_) => panic!("expected a settle"),
        }
    }
}

//! Wire format between the page and the host.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the injected bridge calls
//!   `window.ipc.postMessage(JSON.stringify({...}))`, which reaches the
//!   `ipc_handler` registered on the WebView. Two shapes exist:
//!   `{"kind":"invoke","id":N,"channel":"...","args":[...]}` and
//!   `{"kind":"notify","text":"..."}`.
//! - **Rust -> JS**: Rust evaluates `window.porthole.__settle(id, outcome)`
//!   to answer an invoke and `window.porthole.__deliver(text)` to push on
//!   `host-to-presentation`.

use porthole_common::BridgeError;
use serde::Deserialize;
use serde_json::Value;

/// A message posted by the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InboundMessage {
    Invoke {
        id: u64,
        channel: String,
        #[serde(default)]
        args: Vec<Value>,
    },
    Notify {
        text: String,
    },
}

impl InboundMessage {
    /// Parse a raw JSON body from `postMessage`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Script that installs `window.porthole` before any page script runs.
///
/// The page sees exactly `notify`, `invoke`, `onHostMessage` and
/// `platform`. The two host entry points are non-enumerable and the
/// object is frozen.
pub fn bridge_init_script(platform: &str) -> String {
    let platform = serde_json::to_string(platform).unwrap_or_else(|_| "\"unknown\"".to_string());
    BRIDGE_INIT_TEMPLATE.replace("__PLATFORM__", &platform)
}

const BRIDGE_INIT_TEMPLATE: &str = r#"
(function() {
    if (window.porthole) { return; }
    var post = function(msg) { window.ipc.postMessage(JSON.stringify(msg)); };
    var pending = new Map();
    var listeners = [];
    var nextId = 1;

    var api = {
        platform: __PLATFORM__,
        notify: function(text) {
            post({ kind: "notify", text: String(text) });
        },
        invoke: function(channel) {
            var args = Array.prototype.slice.call(arguments, 1);
            return new Promise(function(resolve, reject) {
                var id = nextId++;
                pending.set(id, { resolve: resolve, reject: reject });
                post({ kind: "invoke", id: id, channel: String(channel), args: args });
            });
        },
        onHostMessage: function(callback) {
            var entry = { callback: callback };
            listeners.push(entry);
            return function unsubscribe() {
                var i = listeners.indexOf(entry);
                if (i !== -1) { listeners.splice(i, 1); }
            };
        }
    };

    Object.defineProperty(api, "__settle", {
        value: function(id, outcome) {
            var waiter = pending.get(id);
            if (!waiter) { return; }
            pending.delete(id);
            if (outcome.ok) {
                waiter.resolve(outcome.value);
            } else {
                var err = new Error(outcome.error.message);
                err.kind = outcome.error.kind;
                waiter.reject(err);
            }
        }
    });
    Object.defineProperty(api, "__deliver", {
        value: function(text) {
            listeners.slice().forEach(function(entry) {
                try { entry.callback(text); } catch (e) { console.error(e); }
            });
        }
    });

    window.porthole = Object.freeze(api);
})();
"#;

/// Outcome object handed to `__settle`.
pub fn settle_payload(result: &Result<Value, BridgeError>) -> Value {
    match result {
        Ok(value) => serde_json::json!({ "ok": true, "value": value }),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_json() }),
    }
}

/// Script that resolves or rejects pending invoke `id`.
pub fn js_settle(id: u64, result: &Result<Value, BridgeError>) -> String {
    let payload = settle_payload(result);
    format!("window.porthole.__settle({id}, {payload});")
}

/// Script that pushes `text` to the page's host-message subscribers.
pub fn js_deliver(text: &str) -> String {
    let text = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.porthole.__deliver({text});")
}

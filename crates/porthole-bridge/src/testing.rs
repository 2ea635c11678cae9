//! Spy host handlers for bridge tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use porthole_common::HandlerError;

use crate::records::{AppInfo, DialogOutcome, DialogRequest, HostSnapshot, SystemInfo};
use crate::{Bridge, HostHandlers, HostRuntime, NotificationHub};

#[derive(Default)]
pub(crate) struct SpyHost {
    pub fail_system_info: Option<String>,
    /// `None` behaves like "no active window".
    pub dialog: Option<DialogOutcome>,
    pub app_info_delay: Option<Duration>,
    pub calls: Mutex<HashMap<&'static str, usize>>,
    pub notes: Mutex<Vec<String>>,
    pub last_dialog: Mutex<Option<(String, String)>>,
}

impl SpyHost {
    fn record(&self, channel: &'static str) {
        *self.calls.lock().unwrap().entry(channel).or_default() += 1;
    }

    pub fn calls(&self, channel: &str) -> usize {
        self.calls.lock().unwrap().get(channel).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn notes(&self) -> Vec<String> {
        self.notes.lock().unwrap().clone()
    }

    pub fn last_dialog(&self) -> Option<(String, String)> {
        self.last_dialog.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostHandlers for SpyHost {
    async fn notify(&self, text: String) {
        self.record("notify-host");
        self.notes.lock().unwrap().push(text);
    }

    async fn get_app_info(&self) -> Result<AppInfo, HandlerError> {
        self.record("get-app-info");
        if let Some(delay) = self.app_info_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(AppInfo::new("Spy", "0.0.1", "test"))
    }

    async fn get_system_info(&self) -> Result<SystemInfo, HandlerError> {
        self.record("get-system-info");
        if let Some(message) = &self.fail_system_info {
            return Err(HandlerError::new(message.clone()));
        }
        Ok(SystemInfo::from(HostSnapshot {
            hostname: "spy".into(),
            cpu_count: 1,
            total_memory_bytes: 0,
            free_memory_bytes: 0,
            home_dir: "/".into(),
            uptime_secs: 0,
        }))
    }

    async fn show_dialog(
        &self,
        request: DialogRequest,
    ) -> Result<Option<DialogOutcome>, HandlerError> {
        self.record("show-dialog");
        *self.last_dialog.lock().unwrap() = Some((request.title, request.message));
        Ok(self.dialog)
    }
}

/// Spawn a host runtime around `spy` on the current tokio runtime.
pub(crate) fn start(spy: SpyHost) -> (Bridge, Arc<SpyHost>, NotificationHub) {
    let spy = Arc::new(spy);
    let hub = NotificationHub::new();
    let (link, runtime) = HostRuntime::new(Arc::clone(&spy) as Arc<dyn HostHandlers>);
    tokio::spawn(runtime.run());
    (Bridge::new(link, hub.clone()), spy, hub)
}

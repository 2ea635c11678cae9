//! Host-side handlers for the bridge operations.

mod dialog;
mod metadata;

use std::sync::Arc;

use async_trait::async_trait;
use porthole_bridge::{
    AppInfo, DialogOutcome, DialogRequest, HostHandlers, NotificationHub, SystemInfo,
};
use porthole_common::HandlerError;

use crate::lifecycle::WindowPresence;

pub use dialog::{DialogParent, DialogPresenter, NativeDialogs};
pub use metadata::{MetadataSource, SysinfoMetadata};

/// What `get-app-info` reports about this build.
#[derive(Debug, Clone)]
pub struct AppIdentity {
    pub name: String,
    pub version: String,
    pub webview_version: String,
}

/// The privileged side of the bridge.
pub struct AppHost {
    identity: AppIdentity,
    presence: WindowPresence,
    notifications: NotificationHub,
    metadata: Arc<dyn MetadataSource>,
    dialogs: Arc<dyn DialogPresenter>,
}

impl AppHost {
    pub fn new(
        identity: AppIdentity,
        presence: WindowPresence,
        notifications: NotificationHub,
        metadata: Arc<dyn MetadataSource>,
        dialogs: Arc<dyn DialogPresenter>,
    ) -> Self {
        Self {
            identity,
            presence,
            notifications,
            metadata,
            dialogs,
        }
    }

    /// Host backed by `sysinfo` and native dialogs parented to `parent`.
    pub fn native(
        identity: AppIdentity,
        presence: WindowPresence,
        notifications: NotificationHub,
        parent: DialogParent,
    ) -> Self {
        Self::new(
            identity,
            presence,
            notifications,
            Arc::new(SysinfoMetadata),
            Arc::new(NativeDialogs::new(parent)),
        )
    }
}

#[async_trait]
impl HostHandlers for AppHost {
    async fn notify(&self, text: String) {
        tracing::info!(text = %text, "message from presentation");
        if self.presence.is_active() {
            self.notifications
                .push(&format!("Host received: \"{text}\""));
        }
    }

    async fn get_app_info(&self) -> Result<AppInfo, HandlerError> {
        Ok(AppInfo::new(
            &self.identity.name,
            &self.identity.version,
            &self.identity.webview_version,
        ))
    }

    async fn get_system_info(&self) -> Result<SystemInfo, HandlerError> {
        let source = Arc::clone(&self.metadata);
        let snapshot = tokio::task::spawn_blocking(move || source.snapshot())
            .await
            .map_err(|e| HandlerError::new(format!("metadata task failed: {e}")))??;
        Ok(SystemInfo::from(snapshot))
    }

    async fn show_dialog(
        &self,
        request: DialogRequest,
    ) -> Result<Option<DialogOutcome>, HandlerError> {
        if !self.presence.is_active() {
            tracing::debug!("show-dialog without a window");
            return Ok(None);
        }
        let outcome = self
            .dialogs
            .confirm(&request.title, &request.message)
            .await?;
        Ok(Some(outcome))
    }
}

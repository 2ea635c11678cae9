//! PortholeApp struct definition and constructor.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use porthole_bridge::{Bridge, HostRuntime, NotificationHub};
use porthole_common::PortholeError;
use porthole_config::{PortholeConfig, RunMode};

use crate::host::{AppHost, AppIdentity, DialogParent};
use crate::lifecycle::WindowLifecycle;
use crate::load_target::LoadTarget;

use super::types::{HostOutbound, MainWindow};

/// Top-level application state.
pub struct PortholeApp {
    pub(super) config: PortholeConfig,
    pub(super) run_mode: RunMode,
    pub(super) target: LoadTarget,

    // Windowing
    pub(super) lifecycle: WindowLifecycle<MainWindow>,
    pub(super) dialog_parent: DialogParent,

    // Bridge
    pub(super) notifications: NotificationHub,
    pub(super) bridge: Option<Bridge>,
    pub(super) outbox_tx: mpsc::Sender<HostOutbound>,
    pub(super) outbox_rx: mpsc::Receiver<HostOutbound>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    /// Bumped on every page load start. Invoke ids restart with each page,
    /// so replies are only delivered to the load that asked.
    pub(super) page_generation: u64,

    pub(super) should_exit: bool,
    pub(super) shut_down: bool,
    pub(super) last_poll: Instant,
}

impl PortholeApp {
    /// Build the app and start the host context on its own runtime.
    pub fn new(
        config: PortholeConfig,
        run_mode: RunMode,
        target: LoadTarget,
        webview_version: String,
    ) -> Result<Self, PortholeError> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("porthole-host")
            .enable_all()
            .build()?;

        let lifecycle = WindowLifecycle::new();
        let notifications = NotificationHub::new();

        let identity = AppIdentity {
            name: config.app.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            webview_version,
        };
        let dialog_parent = DialogParent::new();
        let host = AppHost::native(
            identity,
            lifecycle.presence(),
            notifications.clone(),
            dialog_parent.clone(),
        );
        let (link, host_runtime) = HostRuntime::new(Arc::new(host));
        rt.spawn(host_runtime.run());

        let (outbox_tx, outbox_rx) = mpsc::channel();

        Ok(Self {
            config,
            run_mode,
            target,
            lifecycle,
            dialog_parent,
            bridge: Some(Bridge::new(link, notifications.clone())),
            notifications,
            outbox_tx,
            outbox_rx,
            tokio_runtime: Some(rt),
            page_generation: 0,
            should_exit: false,
            shut_down: false,
            last_poll: Instant::now(),
        })
    }
}

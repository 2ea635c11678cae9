//! Payload records exchanged over the request/response channels.

use porthole_common::HandlerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const SECS_PER_HOUR: f64 = 3600.0;

/// Result of `get-app-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub bridge_version: String,
    pub protocol_version: String,
    pub webview_version: String,
    pub platform: String,
    pub arch: String,
}

impl AppInfo {
    /// Build app info for the running process. Bridge and protocol
    /// versions, platform and arch are filled in here.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        webview_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            bridge_version: env!("CARGO_PKG_VERSION").to_string(),
            protocol_version: crate::PROTOCOL_VERSION.to_string(),
            webview_version: webview_version.into(),
            platform: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }
}

/// Result of `get-system-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub arch: String,
    pub cpu_count: usize,
    pub total_memory: String,
    pub free_memory: String,
    pub home_dir: String,
    pub uptime: String,
}

/// Raw host facts before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSnapshot {
    pub hostname: String,
    pub cpu_count: usize,
    pub total_memory_bytes: u64,
    pub free_memory_bytes: u64,
    pub home_dir: String,
    pub uptime_secs: u64,
}

impl From<HostSnapshot> for SystemInfo {
    fn from(snapshot: HostSnapshot) -> Self {
        Self {
            hostname: snapshot.hostname,
            platform: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_count: snapshot.cpu_count,
            total_memory: format_gigabytes(snapshot.total_memory_bytes),
            free_memory: format_gigabytes(snapshot.free_memory_bytes),
            home_dir: snapshot.home_dir,
            uptime: format_hours(snapshot.uptime_secs),
        }
    }
}

/// `"{:.2} GB"` with GB meaning 1024³ bytes.
pub fn format_gigabytes(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / BYTES_PER_GIB)
}

/// `"{:.2} hours"`.
pub fn format_hours(secs: u64) -> String {
    format!("{:.2} hours", secs as f64 / SECS_PER_HOUR)
}

/// Arguments of `show-dialog`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DialogRequest {
    pub title: String,
    pub message: String,
}

impl DialogRequest {
    /// Decode either `(title, message)` or a single `{title, message}`.
    pub fn from_args(args: &[Value]) -> Result<Self, HandlerError> {
        match args {
            [Value::String(title), Value::String(message)] => Ok(Self {
                title: title.clone(),
                message: message.clone(),
            }),
            [obj @ Value::Object(_)] => serde_json::from_value(obj.clone())
                .map_err(|e| HandlerError::new(format!("invalid dialog options: {e}"))),
            _ => Err(HandlerError::new(
                "expected (title, message) strings or {title, message}",
            )),
        }
    }
}

/// The button the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Confirm,
    Cancel,
}

impl DialogChoice {
    /// Button labels in index order.
    pub const BUTTONS: [&'static str; 2] = ["OK", "Cancel"];

    pub fn index(self) -> u8 {
        match self {
            DialogChoice::Confirm => 0,
            DialogChoice::Cancel => 1,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(DialogChoice::Confirm),
            1 => Some(DialogChoice::Cancel),
            _ => None,
        }
    }
}

impl Serialize for DialogChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

impl<'de> Deserialize<'de> for DialogChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u8::deserialize(deserializer)?;
        DialogChoice::from_index(index)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown dialog response {index}")))
    }
}

/// Result of `show-dialog` when a window was present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogOutcome {
    #[serde(rename = "response")]
    pub choice: DialogChoice,
    pub checkbox_checked: bool,
}

impl DialogOutcome {
    pub fn new(choice: DialogChoice) -> Self {
        Self {
            choice,
            checkbox_checked: false,
        }
    }
}

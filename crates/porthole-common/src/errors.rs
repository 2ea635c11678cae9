use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window error: {0}")]
    WindowError(String),

    #[error("webview error: {0}")]
    WebViewError(String),
}

/// Failure reported by a host-side operation handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors surfaced to a presentation-side caller of the bridge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// The operation name is not on the allow-list. Raised before the
    /// host context sees anything.
    #[error("invalid channel: {0}")]
    InvalidChannel(String),

    #[error("handler for {channel} failed: {message}")]
    HandlerFailure { channel: String, message: String },

    #[error("host context unavailable")]
    HostUnavailable,
}

impl BridgeError {
    /// Stable tag used when the error crosses into the webview.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::InvalidChannel(_) => "InvalidChannel",
            BridgeError::HandlerFailure { .. } => "HandlerFailure",
            BridgeError::HostUnavailable => "HostUnavailable",
        }
    }

    /// JSON shape sent back to the webview for a rejected request.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PortholeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

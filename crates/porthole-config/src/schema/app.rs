//! Application identity.

use serde::{Deserialize, Serialize};

/// Application identity reported to the view through `get-app-info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display name of the application.
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Porthole".into(),
        }
    }
}

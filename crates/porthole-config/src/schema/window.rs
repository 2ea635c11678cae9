//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Main window geometry and appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial logical width.
    pub width: u32,
    /// Initial logical height.
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Background color painted before the view renders (`#RRGGBB`).
    pub background: String,
    /// Keep the window hidden until the first page load finishes.
    pub show_when_ready: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Porthole".into(),
            width: 900,
            height: 700,
            min_width: 600,
            min_height: 400,
            background: "#f5f5f5".into(),
            show_when_ready: true,
        }
    }
}

//! Configuration schema types for Porthole.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod app;
mod load;
mod system;
mod window;

pub use app::*;
pub use load::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Porthole.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PortholeConfig {
    pub app: AppConfig,
    pub window: WindowConfig,
    pub load: LoadConfig,
    pub logging: LoggingConfig,
}

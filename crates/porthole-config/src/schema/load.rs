//! Load target selection: development server or packaged bundle.

use serde::{Deserialize, Serialize};

/// Environment variable that flips `auto` mode into development.
pub const MODE_ENV_VAR: &str = "PORTHOLE_ENV";

/// Configured load mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LoadMode {
    /// Development when `PORTHOLE_ENV=development` or in an unpackaged
    /// (debug) build, packaged otherwise.
    #[default]
    Auto,
    Development,
    Packaged,
}

/// The mode actually in effect once flags and environment are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Packaged,
}

impl RunMode {
    pub fn is_development(self) -> bool {
        matches!(self, RunMode::Development)
    }
}

/// Where the view is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub mode: LoadMode,
    /// Dev server address used in development mode.
    pub dev_url: String,
    /// Directory holding the bundled front-end, relative to the working
    /// directory unless absolute.
    pub bundle_dir: String,
    /// Entry document inside `bundle_dir`.
    pub entry: String,
    /// Open devtools automatically in development mode.
    pub devtools_in_development: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            mode: LoadMode::Auto,
            dev_url: "http://localhost:8080".into(),
            bundle_dir: "renderer".into(),
            entry: "index.html".into(),
            devtools_in_development: true,
        }
    }
}

impl LoadConfig {
    /// Resolve the effective run mode.
    ///
    /// Precedence: `force_dev` (the `--dev` flag), an explicit `mode`,
    /// the `PORTHOLE_ENV` value, then whether this is a debug build.
    pub fn resolve_mode(&self, force_dev: bool, env: Option<&str>, debug_build: bool) -> RunMode {
        if force_dev {
            return RunMode::Development;
        }
        match self.mode {
            LoadMode::Development => RunMode::Development,
            LoadMode::Packaged => RunMode::Packaged,
            LoadMode::Auto => {
                let env_dev = env.is_some_and(|v| v.trim().eq_ignore_ascii_case("development"));
                if env_dev || debug_build {
                    RunMode::Development
                } else {
                    RunMode::Packaged
                }
            }
        }
    }
}

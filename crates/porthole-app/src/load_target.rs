//! Where the page is loaded from in each run mode.

use std::path::{Path, PathBuf};

use porthole_config::schema::LoadConfig;
use porthole_config::RunMode;
use porthole_webview::{bundle_url, NavigationPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadTarget {
    /// Development: a local dev server.
    DevServer { url: String },
    /// Packaged: files on disk served over `porthole://`.
    Bundle { dir: PathBuf, entry: String },
}

impl LoadTarget {
    /// Pick the target for `mode`. A relative `bundle_dir` is resolved
    /// against `cwd`.
    pub fn resolve(load: &LoadConfig, mode: RunMode, cwd: &Path) -> Self {
        match mode {
            RunMode::Development => LoadTarget::DevServer {
                url: load.dev_url.clone(),
            },
            RunMode::Packaged => {
                let configured = Path::new(&load.bundle_dir);
                let dir = if configured.is_absolute() {
                    configured.to_path_buf()
                } else {
                    cwd.join(configured)
                };
                LoadTarget::Bundle {
                    dir,
                    entry: load.entry.clone(),
                }
            }
        }
    }

    /// The URL the WebView opens first.
    pub fn url(&self) -> String {
        match self {
            LoadTarget::DevServer { url } => url.clone(),
            LoadTarget::Bundle { entry, .. } => bundle_url(entry),
        }
    }

    /// Navigation allow-list for this target.
    pub fn navigation_policy(&self) -> NavigationPolicy {
        match self {
            LoadTarget::DevServer { url } => NavigationPolicy::new().with_dev_server(url),
            LoadTarget::Bundle { .. } => NavigationPolicy::new(),
        }
    }
}

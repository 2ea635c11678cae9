/// Configuration for creating the WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Background painted before the first frame, as RGBA.
    pub background: Option<(u8, u8, u8, u8)>,
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            devtools: cfg!(debug_assertions),
            background: None,
        }
    }
}

use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::ContentProvider;
use crate::ipc::bridge_init_script;
use crate::SCHEME;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the WebView as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let init_script = bridge_init_script(std::env::consts::OS);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(true)
            .with_focused(true)
            .with_initialization_script(&init_script);

        if let Some(rgba) = config.background {
            builder = builder.with_background_color(rgba);
        }

        // IPC handler: JS -> Rust
        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events));

        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));

        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.navigation));

        builder = self.attach_custom_protocol(builder);

        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;

        debug!(url = %config.url, devtools = config.devtools, "WebView created");

        Ok(WebViewHandle { webview })
    }

    /// Set the content provider for serving bundled assets via `porthole://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        match &self.content_provider {
            Some(provider) => {
                let cp = Arc::clone(provider);
                builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
                    cp.respond(&request)
                })
            }
            None => builder,
        }
    }
}

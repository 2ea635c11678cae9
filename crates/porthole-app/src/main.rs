mod app_state;
mod cli;
mod host;
mod lifecycle;
mod load_target;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use porthole_config::schema::MODE_ENV_VAR;
use porthole_config::PortholeConfig;

use crate::load_target::LoadTarget;

const DEFAULT_DIRECTIVE: &str = "porthole=info";

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|_| {
        DEFAULT_DIRECTIVE
            .parse()
            .expect("default log directive is valid")
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so `[logging] level` can apply
    let loaded = match &args.config {
        Some(path) => porthole_config::load_config_from(path),
        None => porthole_config::load_config(),
    };
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level.directive())
        .unwrap_or(DEFAULT_DIRECTIVE);

    // Initialize logging
    init_logging(args.log_level.as_deref().unwrap_or(config_level));

    tracing::info!("Porthole v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PortholeConfig::default()
    });

    // Resolve development vs packaged
    let env_mode = std::env::var(MODE_ENV_VAR).ok();
    let run_mode = config
        .load
        .resolve_mode(args.dev, env_mode.as_deref(), cfg!(debug_assertions));
    let cwd = std::env::current_dir().unwrap_or_default();
    let target = LoadTarget::resolve(&config.load, run_mode, &cwd);
    tracing::info!(?run_mode, url = %target.url(), "Load target resolved");

    let webview_version = porthole_webview::engine_version().unwrap_or_else(|e| {
        tracing::warn!("WebView version unavailable: {e}");
        "unavailable".to_string()
    });

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = match app_state::PortholeApp::new(config, run_mode, target, webview_version) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to start host context: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

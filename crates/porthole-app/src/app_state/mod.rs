//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window lifecycle, the WebView, and the tokio runtime
//! the host context runs on.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::PortholeApp;

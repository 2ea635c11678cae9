//! Capability-gated message bridge between a presentation context and the
//! privileged host.
//!
//! - [`Channel`]: the fixed allow-list of channel names
//! - [`Bridge`]: the only surface handed to the presentation side
//!   (`invoke`, `notify`, `on_host_message`, `platform`)
//! - [`HostRuntime`] / [`HostHandlers`]: the host event loop and the one
//!   handler per operation it dispatches to
//! - [`NotificationHub`]: broadcast of host pushes to explicit subscriptions

pub mod bridge;
pub mod channel;
pub mod host;
pub mod notify;
pub mod records;

pub use bridge::Bridge;
pub use channel::{Channel, Direction};
pub use host::{HostHandlers, HostLink, HostRuntime};
pub use notify::{NotificationHub, Subscription};
pub use records::{AppInfo, DialogChoice, DialogOutcome, DialogRequest, HostSnapshot, SystemInfo};

#[cfg(test)]
pub(crate) mod testing;

/// Version of the message shapes exchanged with the view.
pub const PROTOCOL_VERSION: u32 = 1;

//! OS metadata for `get-system-info`.

use porthole_bridge::HostSnapshot;
use porthole_common::HandlerError;
use sysinfo::System;

/// Source of raw host facts.
pub trait MetadataSource: Send + Sync {
    fn snapshot(&self) -> Result<HostSnapshot, HandlerError>;
}

/// Reads host facts through `sysinfo` and `dirs`.
pub struct SysinfoMetadata;

impl MetadataSource for SysinfoMetadata {
    fn snapshot(&self) -> Result<HostSnapshot, HandlerError> {
        let mut system = System::new();
        system.refresh_memory();
        system.refresh_cpu_all();

        let hostname =
            System::host_name().ok_or_else(|| HandlerError::new("hostname unavailable"))?;
        let home_dir =
            dirs::home_dir().ok_or_else(|| HandlerError::new("home directory unavailable"))?;

        Ok(HostSnapshot {
            hostname,
            cpu_count: system.cpus().len(),
            total_memory_bytes: system.total_memory(),
            free_memory_bytes: system.available_memory(),
            home_dir: home_dir.display().to_string(),
            uptime_secs: System::uptime(),
        })
    }
}

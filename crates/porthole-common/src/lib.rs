pub mod errors;
pub mod id;

pub use errors::{BridgeError, ConfigError, HandlerError, PlatformError, PortholeError};
pub use id::{new_correlation_id, RequestId};

pub type Result<T> = std::result::Result<T, PortholeError>;

pub mod errors;
pub mod types;

pub use errors::{BridgeError, ConfigError, HopError, LabelError};
pub use types::{LineRange, TextPosition, TextRange};

pub type Result<T> = std::result::Result<T, HopError>;

pub mod config_error;
pub mod gear_error;

pub use config_error::ConfigError;
pub use gear_error::GearError;

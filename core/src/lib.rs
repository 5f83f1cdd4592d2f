pub mod api;
pub mod app;
pub mod command;
pub mod config;
pub mod errors;
pub mod run;
pub mod usage;

pub use app::App;
pub use command::CommandSet;
pub use errors::{ConfigError, GearError};
pub use run::{run, run_main, Outcome};

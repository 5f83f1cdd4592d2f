//! Stable re-exports for apps built on gear.
//!
//! Prefer importing from `gear_core::api` instead of reaching into internal modules.

pub use crate::app::App;
pub use crate::command::{method_name, run_command, to_camel, CommandFn, CommandSet, Dispatch};
pub use crate::config::configure;
pub use crate::errors::{ConfigError, GearError};
pub use crate::run::{exit_code, report, run, run_main, run_with_args, Outcome};
pub use crate::usage::usage;

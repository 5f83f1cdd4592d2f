mod dispatch;
pub mod naming;
mod registry;

pub use dispatch::{run_command, Dispatch};
pub use naming::{method_name, to_camel};
pub use registry::{CommandFn, CommandSet, CommandSpec};

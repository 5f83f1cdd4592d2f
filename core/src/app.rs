use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::command::CommandSet;

/// An application Gear can configure and dispatch.
///
/// Configuration lives in [`App::Config`]; its value when `run` is called
/// acts as the defaults. Commands are registered in [`App::commands`] as
/// plain functions, usually methods such as `fn build_cmd(&mut self)`.
///
/// ```ignore
/// impl App for Tool {
///     type Config = ToolConfig;
///     fn name(&self) -> &str { "tool" }
///     fn config(&self) -> &ToolConfig { &self.cfg }
///     fn config_mut(&mut self) -> &mut ToolConfig { &mut self.cfg }
///     fn commands(&self) -> CommandSet<Self> {
///         CommandSet::new().add_with_about("build", "build the project", Tool::build_cmd)
///     }
///     fn gui(&mut self) { /* open a window */ }
/// }
/// ```
pub trait App: Sized {
    /// Each leaf field becomes a flag and an environment override. An
    /// `Option` field that is `None` does not serialize, so it gets neither;
    /// config files can still set it.
    type Config: Serialize + DeserializeOwned;

    fn name(&self) -> &str;

    fn about(&self) -> &str {
        ""
    }

    fn config(&self) -> &Self::Config;

    fn config_mut(&mut self) -> &mut Self::Config;

    fn commands(&self) -> CommandSet<Self>;

    /// Entry point used when no command is given. Fire-and-forget.
    fn gui(&mut self);

    fn usage(&self) -> String {
        crate::usage::usage(self)
    }

    /// Prefix for environment overrides. `None` disables them.
    fn env_prefix(&self) -> Option<String> {
        Some(default_env_prefix(self.name()))
    }
}

pub fn default_env_prefix(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' | '.' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

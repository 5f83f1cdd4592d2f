use crate::app::App;
use crate::errors::GearError;

use super::naming::method_name;

/// What `run_command` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The handler ran and returned `Ok`.
    Ran,
    /// `help` was requested and the app has no `HelpCmd`. The caller should
    /// print the text and stop.
    Usage(String),
}

/// Resolves `token` to a registered command and runs it.
///
/// A handler's own error comes back as [`GearError::Command`] holding the
/// exact error the handler returned.
pub fn run_command<A: App>(app: &mut A, token: &str) -> Result<Dispatch, GearError> {
    let commands = app.commands();
    commands.validate()?;

    let name = method_name(token);
    let Some(spec) = commands.get(&name) else {
        // checked after the lookup so an app can register its own `help`
        if token == "help" {
            tracing::debug!(target: "gear.dispatch", "no HelpCmd registered, rendering usage");
            return Ok(Dispatch::Usage(app.usage()));
        }
        return Err(GearError::CommandNotFound(token.to_string()));
    };

    tracing::info!(target: "gear.dispatch", command = %token, method = %name, "running command");
    let handler = spec.handler;
    match handler(app) {
        Ok(()) => Ok(Dispatch::Ran),
        Err(err) => Err(GearError::Command(err)),
    }
}

use std::ffi::OsString;
use std::io::Write;

use crate::app::App;
use crate::command::{run_command, Dispatch};
use crate::config::configure;
use crate::errors::GearError;

/// Result of a successful [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No command was given; the GUI entry point was called.
    Gui,
    /// The named command ran to completion.
    Ran { command: String },
    /// Help was requested. Print the text and exit with code 0.
    Usage(String),
}

/// Configures `app` from `default_files`, the environment and
/// `std::env::args_os`, then opens the GUI or runs the first leftover
/// argument as a command. Arguments that are not valid UTF-8 are reported as
/// a configuration error.
pub fn run<A: App>(app: &mut A, default_files: &[&str]) -> Result<Outcome, GearError> {
    run_with_args(app, default_files, std::env::args_os())
}

/// Same as [`run`] with an explicit argument list (binary name first).
pub fn run_with_args<A, I, T>(
    app: &mut A,
    default_files: &[&str],
    args: I,
) -> Result<Outcome, GearError>
where
    A: App,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let leftovers = configure(app, default_files, args).map_err(GearError::Configure)?;

    let Some(cmd) = leftovers.first() else {
        tracing::info!(target: "gear.run", app = %app.name(), "no command given, launching gui");
        app.gui();
        return Ok(Outcome::Gui);
    };

    match run_command(app, cmd) {
        Ok(Dispatch::Ran) => Ok(Outcome::Ran {
            command: cmd.clone(),
        }),
        Ok(Dispatch::Usage(text)) => Ok(Outcome::Usage(text)),
        Err(err) => Err(GearError::Run {
            cmd: cmd.clone(),
            source: Box::new(err),
        }),
    }
}

/// Top-level driver for `main`: runs the app and maps the outcome to a
/// process exit code. Usage goes to stdout, errors to stderr.
pub fn run_main<A: App>(app: &mut A, default_files: &[&str]) -> i32 {
    exit_code(run(app, default_files))
}

pub fn exit_code(result: Result<Outcome, GearError>) -> i32 {
    report(result, &mut std::io::stdout(), &mut std::io::stderr())
}

/// Writes usage to `out` or the error to `err` (once) and returns the exit code.
pub fn report<O: Write, E: Write>(
    result: Result<Outcome, GearError>,
    out: &mut O,
    err: &mut E,
) -> i32 {
    match result {
        Ok(Outcome::Usage(text)) => {
            let _ = writeln!(out, "{text}");
            0
        }
        Ok(_) => 0,
        Err(e) => {
            tracing::debug!(
                target: "gear.run",
                programmer_error = e.is_programmer_error(),
                "app failed"
            );
            let _ = writeln!(err, "{e}");
            1
        }
    }
}

//! Populates an app's configuration and returns the leftover arguments.
//!
//! Layers, lowest to highest: the config value the app was built with, the
//! default files (every one that exists, in order), `--config <path>`,
//! `<PREFIX>_<FIELD>` environment variables, then command-line flags.

pub mod env;
pub mod flags;
pub mod load;

use std::ffi::OsString;

use crate::app::App;
use crate::errors::ConfigError;

use flags::{FlagSet, CONFIG_ID, HELP_ID, LEFTOVERS_ID};

/// `args` includes the binary name at index 0, as `std::env::args_os` does.
/// Arguments that are not valid UTF-8 are rejected as `ConfigError::Flags`.
pub fn configure<A, I, T>(
    app: &mut A,
    default_files: &[&str],
    args: I,
) -> Result<Vec<String>, ConfigError>
where
    A: App,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let defaults = load::to_table(app.config())?;
    let flags = FlagSet::from_table(&defaults);
    flags.check_reserved()?;

    let matches = flags
        .command(app.name(), app.about())
        .try_get_matches_from(args)
        .map_err(ConfigError::Flags)?;

    let mut merged = defaults;
    for path in default_files {
        match load::read_file(path) {
            Ok(table) => {
                tracing::debug!(target: "gear.config", path = %path, "loaded default config file");
                load::merge(&mut merged, table);
            }
            Err(ConfigError::NotFound(p)) => {
                tracing::debug!(target: "gear.config", path = %p, "default config file not present, skipping");
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = matches.get_one::<String>(CONFIG_ID) {
        let table = load::read_file(path)?;
        tracing::info!(target: "gear.config", path = %path, "loaded config file");
        load::merge(&mut merged, table);
    }

    if let Some(prefix) = app.env_prefix() {
        env::apply(&mut merged, &flags, &prefix)?;
    }

    flags.apply(&mut merged, &matches)?;

    *app.config_mut() = load::from_table(merged)?;

    let mut leftovers: Vec<String> = matches
        .get_many::<String>(LEFTOVERS_ID)
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();
    if matches.get_flag(HELP_ID) {
        leftovers.insert(0, "help".to_string());
    }

    tracing::debug!(target: "gear.config", leftovers = ?leftovers, "configuration complete");
    Ok(leftovers)
}

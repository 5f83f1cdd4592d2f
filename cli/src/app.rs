use gear_core::{App, CommandSet};
use serde::{Deserialize, Serialize};

use crate::commands;

pub const APP_NAME: &str = "gear";
pub const APP_ABOUT: &str = "Gear allows you to edit configuration information and run commands through a CLI and a GUI interface.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearConfig {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default = "default_jobs")]
    pub jobs: u32,

    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,

    /// Output format for `show-config`: `toml` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default)]
    pub release: bool,
}

fn default_jobs() -> u32 {
    4
}

fn default_cache_dir() -> String {
    "~/.cache/gear".to_string()
}

fn default_format() -> String {
    "toml".to_string()
}

fn default_target() -> String {
    "native".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            release: false,
        }
    }
}

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            jobs: default_jobs(),
            cache_dir: default_cache_dir(),
            format: default_format(),
            tags: Vec::new(),
            build: BuildConfig::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GearApp {
    pub cfg: GearConfig,
}

impl App for GearApp {
    type Config = GearConfig;

    fn name(&self) -> &str {
        APP_NAME
    }

    fn about(&self) -> &str {
        APP_ABOUT
    }

    fn config(&self) -> &GearConfig {
        &self.cfg
    }

    fn config_mut(&mut self) -> &mut GearConfig {
        &mut self.cfg
    }

    fn commands(&self) -> CommandSet<Self> {
        commands::command_set()
    }

    // No widget toolkit here: the "GUI" is a read-only overview.
    fn gui(&mut self) {
        match commands::show_config::render(&self.cfg) {
            Ok(text) => println!("{APP_NAME}: {APP_ABOUT}\n\n{text}\nRun `{APP_NAME} help` to list commands."),
            Err(e) => tracing::warn!(target: "gear.gui", error = %e, "failed to render config"),
        }
    }
}

/// `<config_dir>/gear/config.toml`, then `./gear.toml`.
pub fn default_config_files() -> Vec<String> {
    let mut files = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        files.push(
            dir.join(APP_NAME)
                .join("config.toml")
                .to_string_lossy()
                .into_owned(),
        );
    }
    files.push(format!("{APP_NAME}.toml"));
    files
}

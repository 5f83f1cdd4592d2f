pub mod build;
pub mod cache;
pub mod show_config;
pub mod version;

use gear_core::CommandSet;

use crate::app::GearApp;

pub fn command_set() -> CommandSet<GearApp> {
    CommandSet::new()
        .add_with_about("build", "Build the configured target", build::build_cmd)
        .add_with_about("clear-cache", "Remove the cache directory", cache::clear_cache_cmd)
        .add_with_about("show-config", "Print the effective configuration", show_config::show_config_cmd)
        .add_with_about("version", "Print the version", version::version_cmd)
}

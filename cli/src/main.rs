mod app;
mod commands;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut gear = app::GearApp::default();
    let files = app::default_config_files();
    let files: Vec<&str> = files.iter().map(String::as_str).collect();

    let exit = gear_core::run_main(&mut gear, &files);
    std::process::exit(exit);
}

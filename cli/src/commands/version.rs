use crate::app::{GearApp, APP_NAME};

pub fn version_cmd(_app: &mut GearApp) -> anyhow::Result<()> {
    println!("{APP_NAME} {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

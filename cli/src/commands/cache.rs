use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::app::GearApp;

pub fn clear_cache_cmd(app: &mut GearApp) -> anyhow::Result<()> {
    let dir = resolve(&app.cfg.cache_dir)?;
    if clear(&dir)? {
        println!("removed {}", dir.display());
    } else {
        println!("nothing to remove at {}", dir.display());
    }
    Ok(())
}

pub fn resolve(cache_dir: &str) -> anyhow::Result<PathBuf> {
    let trimmed = cache_dir.trim();
    if trimmed.is_empty() {
        anyhow::bail!("cache_dir is empty");
    }
    let dir = PathBuf::from(shellexpand::tilde(trimmed).into_owned());
    if dir.parent().is_none() {
        anyhow::bail!("refusing to remove {}", dir.display());
    }
    Ok(dir)
}

/// Returns whether anything was removed.
pub fn clear(dir: &Path) -> anyhow::Result<bool> {
    if !dir.exists() {
        tracing::debug!(target: "gear.cache", path = %dir.display(), "cache dir absent");
        return Ok(false);
    }
    std::fs::remove_dir_all(dir).with_context(|| format!("failed to remove {}", dir.display()))?;
    tracing::info!(target: "gear.cache", path = %dir.display(), "cache cleared");
    Ok(true)
}

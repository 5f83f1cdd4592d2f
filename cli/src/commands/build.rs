use crate::app::{GearApp, GearConfig};

pub fn build_cmd(app: &mut GearApp) -> anyhow::Result<()> {
    for line in plan(&app.cfg)? {
        println!("{line}");
    }
    Ok(())
}

pub fn plan(cfg: &GearConfig) -> anyhow::Result<Vec<String>> {
    if cfg.jobs == 0 {
        anyhow::bail!("jobs must be at least 1");
    }
    if cfg.build.target.trim().is_empty() {
        anyhow::bail!("build target is empty");
    }

    let mode = if cfg.build.release { "release" } else { "debug" };
    let mut lines = vec![format!(
        "building {} ({mode}) with {} job(s)",
        cfg.build.target, cfg.jobs
    )];
    if !cfg.tags.is_empty() {
        lines.push(format!("tags: {}", cfg.tags.join(", ")));
    }
    if cfg.verbose {
        lines.push(format!("cache: {}", cfg.cache_dir));
    }

    tracing::info!(target: "gear.build", target_name = %cfg.build.target, mode, jobs = cfg.jobs, "build planned");
    Ok(lines)
}

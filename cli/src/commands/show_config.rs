use crate::app::{GearApp, GearConfig};

pub fn show_config_cmd(app: &mut GearApp) -> anyhow::Result<()> {
    println!("{}", render(&app.cfg)?);
    Ok(())
}

pub fn render(cfg: &GearConfig) -> anyhow::Result<String> {
    match cfg.format.as_str() {
        "json" => Ok(serde_json::to_string_pretty(cfg)?),
        "toml" => Ok(toml::to_string_pretty(cfg)?),
        other => anyhow::bail!("unknown format {other:?} (expected toml or json)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_formats_round_trip() {
        let mut cfg = GearConfig::default();
        cfg.tags = vec!["a".into()];

        let text = render(&cfg).unwrap();
        let back: GearConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);

        cfg.format = "json".into();
        let text = render(&cfg).unwrap();
        let back: GearConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_unknown_format() {
        let cfg = GearConfig {
            format: "yaml".into(),
            ..GearConfig::default()
        };
        let err = render(&cfg).unwrap_err();
        assert!(err.to_string().contains("\"yaml\""));
    }
}

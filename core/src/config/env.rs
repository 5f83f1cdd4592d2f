use std::env::VarError;

use toml::Table;

use crate::errors::ConfigError;

use super::flags::{coerce, set_path, FlagSet};

pub fn env_key(prefix: &str, path: &str) -> String {
    format!("{prefix}_{}", path.replace('.', "_").to_ascii_uppercase())
}

/// Applies `<PREFIX>_<FIELD>` overrides. Blank values are ignored; values
/// that are not valid unicode are an error.
pub fn apply(table: &mut Table, flags: &FlagSet, prefix: &str) -> Result<(), ConfigError> {
    for field in &flags.fields {
        let key = env_key(prefix, &field.path);
        let raw = match std::env::var(&key) {
            Ok(raw) => raw,
            Err(VarError::NotPresent) => continue,
            Err(e @ VarError::NotUnicode(_)) => {
                return Err(ConfigError::EnvInvalid {
                    key,
                    source: e.into(),
                })
            }
        };
        if raw.trim().is_empty() {
            continue;
        }
        let value = coerce(&raw, &field.default).map_err(|msg| ConfigError::EnvInvalid {
            key: key.clone(),
            source: anyhow::anyhow!(msg),
        })?;
        tracing::debug!(target: "gear.config", key = %key, "env override");
        set_path(table, &field.path, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_env_key() {
        assert_eq!(env_key("GEAR", "cache_dir"), "GEAR_CACHE_DIR");
        assert_eq!(env_key("GEAR", "build.release"), "GEAR_BUILD_RELEASE");
    }

    #[test]
    fn test_env_overrides_and_blank_skip() {
        let defaults: Table = toml::from_str("jobs = 1\nname = \"x\"\ntags = [\"a\"]").unwrap();
        let flags = FlagSet::from_table(&defaults);

        std::env::set_var("GEARENVTEST_JOBS", "7");
        std::env::set_var("GEARENVTEST_NAME", "   ");
        std::env::set_var("GEARENVTEST_TAGS", "b, c");

        let mut table = defaults.clone();
        apply(&mut table, &flags, "GEARENVTEST").unwrap();

        std::env::remove_var("GEARENVTEST_JOBS");
        std::env::remove_var("GEARENVTEST_NAME");
        std::env::remove_var("GEARENVTEST_TAGS");

        assert_eq!(table["jobs"], Value::Integer(7));
        assert_eq!(table["name"], Value::String("x".into()));
        assert_eq!(table["tags"], Value::Array(vec!["b".into(), "c".into()]));
    }

    #[test]
    fn test_env_invalid_names_the_key() {
        let defaults: Table = toml::from_str("jobs = 1").unwrap();
        let flags = FlagSet::from_table(&defaults);

        std::env::set_var("GEARENVBAD_JOBS", "lots");
        let err = apply(&mut defaults.clone(), &flags, "GEARENVBAD").unwrap_err();
        std::env::remove_var("GEARENVBAD_JOBS");

        assert!(matches!(err, ConfigError::EnvInvalid { ref key, .. } if key == "GEARENVBAD_JOBS"));
    }

    #[cfg(unix)]
    #[test]
    fn test_env_not_unicode_is_reported() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let defaults: Table = toml::from_str("name = \"x\"").unwrap();
        let flags = FlagSet::from_table(&defaults);

        std::env::set_var("GEARENVRAW_NAME", OsString::from_vec(vec![0x66, 0xff]));
        let err = apply(&mut defaults.clone(), &flags, "GEARENVRAW").unwrap_err();
        std::env::remove_var("GEARENVRAW_NAME");

        match err {
            ConfigError::EnvInvalid { key, source } => {
                assert_eq!(key, "GEARENVRAW_NAME");
                assert!(source.to_string().contains("valid unicode"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}

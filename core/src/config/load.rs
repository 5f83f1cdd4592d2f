use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use toml::{Table, Value};

use crate::errors::ConfigError;

/// Reads one config file into a table. `.json` is parsed as JSON, anything
/// else as TOML. `~` is expanded.
pub fn read_file(path: &str) -> Result<Table, ConfigError> {
    let expanded = shellexpand::tilde(path).into_owned();
    let p = Path::new(&expanded);
    if !p.is_file() {
        return Err(ConfigError::NotFound(expanded));
    }

    let s = std::fs::read_to_string(p).map_err(|source| ConfigError::Read {
        path: expanded.clone(),
        source,
    })?;

    let is_json = p
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let table = if is_json {
        parse_json(&s)
    } else {
        toml::from_str::<Table>(&s).map_err(anyhow::Error::from)
    };
    table.map_err(|source| ConfigError::Parse {
        path: expanded,
        source,
    })
}

fn parse_json(s: &str) -> anyhow::Result<Table> {
    let json: serde_json::Value = serde_json::from_str(s)?;
    match Value::try_from(json)? {
        Value::Table(t) => Ok(t),
        other => anyhow::bail!("top level must be an object, got {}", other.type_str()),
    }
}

/// Deep merge: tables merge key by key, everything else is replaced.
pub fn merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(dst)), Value::Table(src)) => merge(dst, src),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

pub fn to_table<C: Serialize>(cfg: &C) -> Result<Table, ConfigError> {
    match Value::try_from(cfg).map_err(|e| ConfigError::Decode(e.into()))? {
        Value::Table(t) => Ok(t),
        other => Err(ConfigError::Decode(anyhow::anyhow!(
            "config must serialize to a table, got {}",
            other.type_str()
        ))),
    }
}

pub fn from_table<C: DeserializeOwned>(table: Table) -> Result<C, ConfigError> {
    Value::Table(table)
        .try_into::<C>()
        .map_err(|e| ConfigError::Decode(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_merge_is_deep() {
        let mut base: Table = toml::from_str("a = 1\n[t]\nx = 1\ny = 2").unwrap();
        let overlay: Table = toml::from_str("b = 2\n[t]\ny = 3").unwrap();
        merge(&mut base, overlay);
        let expected: Table = toml::from_str("a = 1\nb = 2\n[t]\nx = 1\ny = 3").unwrap();
        assert_eq!(base, expected);
    }

    #[test]
    fn test_read_json_file() {
        let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(f, r#"{{"jobs": 3, "build": {{"target": "wasm"}}}}"#).unwrap();
        let t = read_file(f.path().to_str().unwrap()).unwrap();
        assert_eq!(t["jobs"], Value::Integer(3));
        assert_eq!(t["build"]["target"], Value::String("wasm".into()));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = read_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_bad_toml_names_the_file() {
        let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(f, "jobs = = 3").unwrap();
        let path = f.path().to_str().unwrap().to_string();
        match read_file(&path).unwrap_err() {
            ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

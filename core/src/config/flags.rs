use clap::{Arg, ArgAction, ArgMatches, Command};
use toml::{Table, Value};

use crate::errors::ConfigError;

pub const CONFIG_ID: &str = "config";
pub const HELP_ID: &str = "help";
pub const LEFTOVERS_ID: &str = "leftovers";

const RESERVED: &[&str] = &[CONFIG_ID, HELP_ID, LEFTOVERS_ID];

/// One settable leaf of the configuration.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Dotted path into the config table, e.g. `build.release`.
    pub path: String,
    /// Long flag name, e.g. `build.release` or `cache-dir`.
    pub flag: String,
    pub default: Value,
}

impl FieldSpec {
    fn value_name(&self) -> &'static str {
        match &self.default {
            Value::Boolean(_) => "BOOL",
            Value::Integer(_) => "INT",
            Value::Float(_) => "FLOAT",
            Value::Datetime(_) => "DATETIME",
            Value::Array(_) => "LIST",
            Value::String(_) | Value::Table(_) => "STRING",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    pub fields: Vec<FieldSpec>,
    /// Fields whose flag name collides with a built-in flag.
    pub reserved_hits: Vec<String>,
}

impl FlagSet {
    pub fn from_table(defaults: &Table) -> Self {
        let mut set = FlagSet::default();
        collect_leaves(defaults, "", &mut set);
        set
    }

    pub fn check_reserved(&self) -> Result<(), ConfigError> {
        match self.reserved_hits.first() {
            Some(path) => Err(ConfigError::Validation(format!(
                "config field `{path}` collides with a built-in flag"
            ))),
            None => Ok(()),
        }
    }

    pub fn command(&self, name: &str, about: &str) -> Command {
        let mut cmd = Command::new(name.to_string())
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .arg(
                Arg::new(CONFIG_ID)
                    .long(CONFIG_ID)
                    .value_name("PATH")
                    .action(ArgAction::Set)
                    .help("Load configuration from PATH"),
            )
            .arg(
                Arg::new(HELP_ID)
                    .short('h')
                    .long(HELP_ID)
                    .action(ArgAction::SetTrue)
                    .help("Print usage and exit"),
            );
        if !about.is_empty() {
            cmd = cmd.about(about.to_string());
        }

        for field in &self.fields {
            let mut arg = Arg::new(field.flag.clone())
                .long(field.flag.clone())
                .value_name(field.value_name())
                .help(format!("(current: {})", field.default));
            arg = match &field.default {
                Value::Boolean(_) => arg
                    .action(ArgAction::Set)
                    .num_args(0..=1)
                    .require_equals(true)
                    .default_missing_value("true"),
                Value::Array(_) => arg.action(ArgAction::Append).value_delimiter(','),
                Value::Integer(_) | Value::Float(_) => {
                    arg.action(ArgAction::Set).allow_negative_numbers(true)
                }
                _ => arg.action(ArgAction::Set),
            };
            cmd = cmd.arg(arg);
        }

        cmd.arg(
            Arg::new(LEFTOVERS_ID)
                .value_name("COMMAND")
                .help("Command to run, followed by its arguments (omit to open the GUI)")
                .num_args(1..)
                .action(ArgAction::Append)
                .trailing_var_arg(true),
        )
    }

    /// Writes every flag given on the command line into `table`.
    pub fn apply(&self, table: &mut Table, matches: &ArgMatches) -> Result<(), ConfigError> {
        for field in &self.fields {
            let Some(raw) = matches.get_many::<String>(&field.flag) else {
                continue;
            };
            let raw: Vec<&str> = raw.map(String::as_str).collect();
            let value = coerce_many(&raw, &field.default)
                .map_err(|msg| ConfigError::Validation(format!("--{}: {msg}", field.flag)))?;
            tracing::debug!(target: "gear.config", flag = %field.flag, value = %value, "flag override");
            set_path(table, &field.path, value);
        }
        Ok(())
    }
}

fn collect_leaves(table: &Table, prefix: &str, set: &mut FlagSet) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Table(inner) => collect_leaves(inner, &path, set),
            Value::Array(items) if items.iter().any(|v| v.is_table() || v.is_array()) => {
                tracing::debug!(target: "gear.config", path = %path, "nested array has no flag");
            }
            _ => {
                let flag = path.replace('_', "-");
                if RESERVED.contains(&flag.as_str()) {
                    set.reserved_hits.push(path);
                    continue;
                }
                set.fields.push(FieldSpec {
                    path,
                    flag,
                    default: value.clone(),
                });
            }
        }
    }
}

pub fn set_path(table: &mut Table, path: &str, value: Value) {
    let mut parts: Vec<&str> = path.split('.').collect();
    let Some(last) = parts.pop() else {
        return;
    };
    let mut cur = table;
    for part in parts {
        let entry = cur
            .entry(part.to_string())
            .or_insert_with(|| Value::Table(Table::new()));
        if !entry.is_table() {
            *entry = Value::Table(Table::new());
        }
        let Value::Table(next) = entry else {
            unreachable!("entry was just made a table");
        };
        cur = next;
    }
    cur.insert(last.to_string(), value);
}

/// Coerces raw strings to the shape of `template`. Lists take every raw value;
/// scalars take the last one.
pub fn coerce_many(raw: &[&str], template: &Value) -> Result<Value, String> {
    match template {
        Value::Array(items) => {
            let elem = items
                .first()
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()));
            raw.iter()
                .map(|r| r.trim())
                .filter(|r| !r.is_empty())
                .map(|r| coerce(r, &elem))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        _ => match raw.last() {
            Some(r) => coerce(r, template),
            None => Err("missing value".to_string()),
        },
    }
}

pub fn coerce(raw: &str, template: &Value) -> Result<Value, String> {
    match template {
        Value::String(_) => Ok(Value::String(raw.to_string())),
        Value::Integer(_) => raw
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| format!("expected an integer, got {raw:?} ({e})")),
        Value::Float(_) => raw
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| format!("expected a number, got {raw:?} ({e})")),
        Value::Boolean(_) => parse_bool(raw)
            .map(Value::Boolean)
            .ok_or_else(|| format!("expected true or false, got {raw:?}")),
        Value::Datetime(_) => raw
            .trim()
            .parse::<toml::value::Datetime>()
            .map(Value::Datetime)
            .map_err(|e| format!("expected a datetime, got {raw:?} ({e})")),
        Value::Array(_) => coerce_many(&raw.split(',').collect::<Vec<_>>(), template),
        Value::Table(_) => Err("tables cannot be set from a single value".to_string()),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn defaults() -> Table {
        toml::from_str(
            r#"
            verbose = false
            jobs = 4
            cache_dir = "/tmp/cache"
            tags = ["a"]

            [build]
            release = false
            target = "native"
            "#,
        )
        .unwrap()
    }

    fn parse(set: &FlagSet, args: &[&str]) -> Result<ArgMatches, clap::Error> {
        set.command("tool", "")
            .try_get_matches_from(std::iter::once("tool").chain(args.iter().copied()))
    }

    #[test]
    fn test_leaves_become_kebab_flags() {
        let set = FlagSet::from_table(&defaults());
        let mut flags: Vec<_> = set.fields.iter().map(|f| f.flag.as_str()).collect();
        flags.sort();
        assert_eq!(
            flags,
            vec!["build.release", "build.target", "cache-dir", "jobs", "tags", "verbose"]
        );
    }

    #[test]
    fn test_apply_coerces_to_default_types() {
        let set = FlagSet::from_table(&defaults());
        let m = parse(
            &set,
            &["--verbose", "--jobs", "8", "--build.target=wasm", "--tags", "x,y", "--tags", "z"],
        )
        .unwrap();

        let mut table = defaults();
        set.apply(&mut table, &m).unwrap();

        assert_eq!(table["verbose"], Value::Boolean(true));
        assert_eq!(table["jobs"], Value::Integer(8));
        assert_eq!(table["build"]["target"], Value::String("wasm".into()));
        assert_eq!(table["build"]["release"], Value::Boolean(false));
        assert_eq!(
            table["tags"],
            Value::Array(vec!["x".into(), "y".into(), "z".into()])
        );
    }

    #[test]
    fn test_bool_flag_does_not_swallow_command() {
        let set = FlagSet::from_table(&defaults());
        let m = parse(&set, &["--verbose", "build", "--jobs", "2"]).unwrap();
        let leftovers: Vec<_> = m
            .get_many::<String>(LEFTOVERS_ID)
            .unwrap()
            .cloned()
            .collect();
        assert_eq!(leftovers, vec!["build", "--jobs", "2"]);
        assert!(m.get_many::<String>("jobs").is_none());
    }

    #[test]
    fn test_numbers_accept_negative_values() {
        let table: Table = toml::from_str("offset = 0\nratio = 1.0").unwrap();
        let set = FlagSet::from_table(&table);
        let m = parse(&set, &["--offset", "-5", "--ratio", "-0.5", "run"]).unwrap();

        let mut table = table.clone();
        set.apply(&mut table, &m).unwrap();
        assert_eq!(table["offset"], Value::Integer(-5));
        assert_eq!(table["ratio"], Value::Float(-0.5));
    }

    #[test]
    fn test_help_labels_current_values() {
        let set = FlagSet::from_table(&defaults());
        let help = set.command("tool", "").render_help().to_string();
        assert!(help.contains("(current: 4)"));
        assert!(help.contains("Command to run"));
    }

    #[test]
    fn test_bad_integer_is_validation_error() {
        let set = FlagSet::from_table(&defaults());
        let m = parse(&set, &["--jobs", "many"]).unwrap();
        let err = set.apply(&mut defaults(), &m).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.starts_with("--jobs")));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let set = FlagSet::from_table(&defaults());
        assert!(parse(&set, &["--nope", "build"]).is_err());
    }

    #[test]
    fn test_reserved_field_names() {
        let table: Table = toml::from_str("config = \"x\"\njobs = 1").unwrap();
        let set = FlagSet::from_table(&table);
        assert_eq!(set.reserved_hits, vec!["config".to_string()]);
        assert!(set.check_reserved().is_err());
    }

    #[test]
    fn test_coerce_bool_spellings() {
        let t = Value::Boolean(false);
        assert_eq!(coerce("yes", &t), Ok(Value::Boolean(true)));
        assert_eq!(coerce("OFF", &t), Ok(Value::Boolean(false)));
        assert!(coerce("maybe", &t).is_err());
    }

    #[test]
    fn test_set_path_creates_tables() {
        let mut table = Table::new();
        set_path(&mut table, "a.b.c", Value::Integer(1));
        assert_eq!(table["a"]["b"]["c"], Value::Integer(1));
    }
}

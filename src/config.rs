use crate::db::Destination;
use crate::error::{Error, Result};
use serde_derive::Deserialize;
use std::path::Path;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "cdg.toml";

/// Where the compilation database goes when nothing else says.
pub const DEFAULT_OUTPUT: &str = "debug/compile_commands.json";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for the log level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Contents of a `cdg.toml` file.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Default output path, or `-` for standard output.
    pub output: Option<String>,
    /// Default log level.
    pub log_level: Option<String>,
}

impl Config {
    /// Load the config at `path`. Without a path, `cdg.toml` in the working
    /// directory is used if it exists.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) if !path.exists() => Err(Error::ConfigNotFound(path.to_owned())),
            Some(path) => read_config(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    read_config(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Read the given file into a config.
pub fn read_config(path: &Path) -> Result<Config> {
    let data = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    toml::from_str(&data).map_err(|source| Error::Config {
        path: path.to_owned(),
        source,
    })
}

/// Settings for one run, after command line, environment and config file
/// have been merged.
#[derive(Debug, PartialEq, Eq)]
pub struct Settings {
    pub output: Destination,
    pub log_level: String,
}

impl Settings {
    /// Command line values win over the environment, which wins over the
    /// config file. The environment only carries a log level.
    pub fn resolve(
        config: &Config,
        output: Option<&str>,
        log_level: Option<&str>,
        env_log_level: Option<&str>,
    ) -> Settings {
        let output = output
            .or(config.output.as_deref())
            .unwrap_or(DEFAULT_OUTPUT);
        let log_level = log_level
            .or(env_log_level.filter(|l| !l.is_empty()))
            .or(config.log_level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Settings {
            output: Destination::from(output),
            log_level: log_level.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_config() {
        let config: Config =
            toml::from_str("output = \"-\"\nlog-level = \"debug\"\n").unwrap();
        assert_eq!(config.output.as_deref(), Some("-"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<Config>("outptu = \"x\"\n").is_err());
    }

    #[test]
    fn test_load_explicit_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(p) if p == path));
    }

    #[test]
    fn test_load_explicit_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cdg.toml");
        std::fs::write(&path, "output = [").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cdg.toml");
        std::fs::write(&path, "output = \"out/cc.json\"\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output.as_deref(), Some("out/cc.json"));
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = Settings::resolve(&Config::default(), None, None, None);
        assert_eq!(
            settings.output,
            Destination::File(PathBuf::from(DEFAULT_OUTPUT))
        );
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_resolve_precedence() {
        let config = Config {
            output: Some("from-config.json".into()),
            log_level: Some("warn".into()),
        };

        let settings = Settings::resolve(&config, None, None, None);
        assert_eq!(
            settings.output,
            Destination::File(PathBuf::from("from-config.json"))
        );
        assert_eq!(settings.log_level, "warn");

        let settings = Settings::resolve(&config, None, None, Some("debug"));
        assert_eq!(settings.log_level, "debug");

        let settings = Settings::resolve(&config, Some("-"), Some("trace"), Some("debug"));
        assert_eq!(settings.output, Destination::Stdout);
        assert_eq!(settings.log_level, "trace");
    }

    #[test]
    fn test_resolve_ignores_empty_env() {
        let settings = Settings::resolve(&Config::default(), None, None, Some(""));
        assert_eq!(settings.log_level, "info");
    }
}

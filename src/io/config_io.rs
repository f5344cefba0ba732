use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Default backing file name, placed in the home directory
pub const DEFAULT_FILE_NAME: &str = "todo.txt";

/// Environment variable that overrides the backing file
pub const FILE_ENV: &str = "CHECKOFF_FILE";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the user's home directory
pub fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Directory holding config.toml, respecting XDG_CONFIG_HOME
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
        .join("checkoff")
}

/// Directory for the TUI log, respecting XDG_STATE_HOME
pub fn state_dir() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local").join("state"))
        .join("checkoff")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Read config from a specific path. A missing file yields the defaults.
pub fn read_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read config from the default location, falling back to defaults with a
/// warning if it can't be read or parsed.
pub fn load_config() -> Config {
    let path = config_path();
    match read_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "using default config");
            Config::default()
        }
    }
}

/// Expand a leading `~/` (or a bare `~`) against `home`.
pub fn expand_tilde(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

/// Pick the backing file: explicit flag, then environment, then config, then
/// `~/todo.txt`.
pub fn resolve_file_path(
    flag: Option<&str>,
    env: Option<&str>,
    config: &Config,
    home: &Path,
) -> PathBuf {
    flag.or(env.filter(|s| !s.is_empty()))
        .or(config.file.as_deref())
        .map(|raw| expand_tilde(raw, home))
        .unwrap_or_else(|| home.join(DEFAULT_FILE_NAME))
}

/// Resolve the backing file against the real environment.
pub fn file_path(flag: Option<&str>, config: &Config) -> PathBuf {
    let env = std::env::var(FILE_ENV).ok();
    resolve_file_path(flag, env.as_deref(), config, &home_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::ReconcilePolicy;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_from(&tmp.path().join("config.toml")).unwrap();
        assert!(config.file.is_none());
    }

    #[test]
    fn reads_config_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "file = \"/tmp/list.txt\"\nreconcile = \"rebuild\"\n").unwrap();
        let config = read_config_from(&path).unwrap();
        assert_eq!(config.file.as_deref(), Some("/tmp/list.txt"));
        assert_eq!(config.reconcile, ReconcilePolicy::Rebuild);
    }

    #[test]
    fn bad_config_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "reconcile = \"sometimes\"\n").unwrap();
        let err = read_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn tilde_expansion() {
        let home = Path::new("/home/u");
        assert_eq!(expand_tilde("~/todo.txt", home), home.join("todo.txt"));
        assert_eq!(expand_tilde("~", home), home.to_path_buf());
        assert_eq!(expand_tilde("/abs/t.txt", home), PathBuf::from("/abs/t.txt"));
        assert_eq!(expand_tilde("~other/t", home), PathBuf::from("~other/t"));
    }

    #[test]
    fn file_path_precedence() {
        let home = Path::new("/home/u");
        let mut config = Config::default();
        assert_eq!(
            resolve_file_path(None, None, &config, home),
            home.join("todo.txt")
        );

        config.file = Some("~/lists/work.txt".into());
        assert_eq!(
            resolve_file_path(None, None, &config, home),
            home.join("lists/work.txt")
        );
        assert_eq!(
            resolve_file_path(None, Some("/env.txt"), &config, home),
            PathBuf::from("/env.txt")
        );
        assert_eq!(
            resolve_file_path(Some("flag.txt"), Some("/env.txt"), &config, home),
            PathBuf::from("flag.txt")
        );
        // An empty env var is ignored
        assert_eq!(
            resolve_file_path(None, Some(""), &config, home),
            home.join("lists/work.txt")
        );
    }
}

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory under `$HOME` holding `config.toml`.
const CONFIG_DIR: &str = "~/.config/md2html";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// User defaults for the `md2html` binary.
///
/// Every key is optional; command line flags take precedence over both.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Template file used when `--template` is not given.
    pub template: Option<PathBuf>,
    /// Title used when `--title` is not given.
    pub title: Option<String>,
}

impl Config {
    /// Loads the config at `path`, or `Ok(None)` if there is no file.
    ///
    /// `~` and `$VAR` in `template` are expanded. A relative `template` is
    /// taken relative to the directory holding the config file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(None);
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(dir) = path.parent() {
            config.resolve_template(dir);
        }

        log::debug!("Loaded config from {}", path.display());
        Ok(Some(config))
    }

    /// Loads the config from [`Config::config_path`].
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// `~/.config/md2html/config.toml`, with `~` expanded.
    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_DIR).as_ref()).join(CONFIG_FILE)
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    fn resolve_template(&mut self, config_dir: &Path) {
        if let Some(template) = self.template.take() {
            let template = expand_path(&template).unwrap_or(template);
            self.template = Some(if template.is_relative() {
                config_dir.join(template)
            } else {
                template
            });
        }
    }
}

/// Expands `~` and environment variables; `None` if a variable is unset.
fn expand_path(path: &Path) -> Option<PathBuf> {
    shellexpand::full(&path.to_string_lossy())
        .ok()
        .map(|expanded| PathBuf::from(expanded.as_ref()))
}

//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
const USER_CONFIG_PATH: &str = "debugger-deploy/config.toml";

const ENV_CONFIG: &str = "DEBUGGER_DEPLOY_CONFIG";
const ENV_SOURCE: &str = "DEBUGGER_DEPLOY_SOURCE";
const ENV_ASSEMBLIES: &str = "DEBUGGER_DEPLOY_ASSEMBLIES";

/// Layered configuration loaded from defaults, the user config file, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Page to deploy instead of the `index.html` next to the executable.
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub search: Search,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Search {
    /// Extra Assemblies candidates, probed after explicit flags.
    #[serde(default)]
    pub assemblies: Vec<PathBuf>,
    #[serde(default)]
    include_defaults: Option<bool>,
}

impl Search {
    fn default_include_defaults() -> bool {
        true
    }

    /// Whether the platform's standard install locations are probed.
    pub fn include_defaults(&self) -> bool {
        self.include_defaults
            .unwrap_or_else(Self::default_include_defaults)
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    source: Option<PathBuf>,
    assemblies: Vec<PathBuf>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            source: env::var_os(ENV_SOURCE)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            assemblies: env::var_os(ENV_ASSEMBLIES)
                .map(|value| {
                    env::split_paths(&value)
                        .filter(|path| !path.as_os_str().is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    #[cfg(test)]
    fn for_tests(source: &str, assemblies: &[&str]) -> Self {
        Self {
            source: Some(PathBuf::from(source)),
            assemblies: assemblies.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, the user config file, and env overrides.
    ///
    /// `explicit` (or `DEBUGGER_DEPLOY_CONFIG`) must point at a readable file;
    /// the per-user default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let env_overrides = EnvOverrides::from_env();
        let file = match explicit {
            Some(path) => Some(ConfigFile::Required(path.to_path_buf())),
            None => match env::var_os(ENV_CONFIG).filter(|value| !value.is_empty()) {
                Some(path) => Some(ConfigFile::Required(PathBuf::from(path))),
                None => user_config_path().map(ConfigFile::Optional),
            },
        };
        Self::load_with_layers(file, env_overrides)
    }

    fn load_with_layers(file: Option<ConfigFile>, env_overrides: EnvOverrides) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        match file {
            Some(ConfigFile::Required(path)) => layers.push(Self::from_file(&path)?),
            Some(ConfigFile::Optional(path)) if path.exists() => {
                layers.push(Self::from_file(&path)?)
            }
            _ => {}
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data).with_context(|| format!("invalid config file: {}", path.display()))
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            source: other.source.or(self.source),
            search: merge_search(self.search, other.search),
        }
    }
}

#[derive(Debug)]
enum ConfigFile {
    Required(PathBuf),
    Optional(PathBuf),
}

fn merge_search(mut base: Search, overlay: Search) -> Search {
    base.assemblies.extend(overlay.assemblies);
    if let Some(value) = overlay.include_defaults {
        base.include_defaults = Some(value);
    }
    base
}

fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join(USER_CONFIG_PATH))
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(source) = env.source {
        config.source = Some(source);
    }
    config.search.assemblies.extend(env.assemblies);
    config
}

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
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".seqprobe/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub prompt: Prompt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "Defaults::default_format")]
    pub format: String,
}

impl Defaults {
    fn default_format() -> String {
        "text".into()
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(default = "Prompt::default_sequence")]
    pub sequence: String,
    #[serde(default = "Prompt::default_target")]
    pub target: String,
}

impl Prompt {
    fn default_sequence() -> String {
        "Enter a sequence of integers separated by spaces: ".into()
    }

    fn default_target() -> String {
        "Enter a positive integer to look up: ".into()
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            sequence: Self::default_sequence(),
            target: Self::default_target(),
        }
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    format: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            format: env::var("SEQPROBE_FORMAT").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(format: &str) -> Self {
        Self {
            format: Some(format.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace config, and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global, workspace, env)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            defaults: merge_defaults(self.defaults, other.defaults),
            prompt: merge_prompt(self.prompt, other.prompt),
        }
    }
}

fn merge_defaults(base: Defaults, overlay: Defaults) -> Defaults {
    Defaults {
        format: if overlay.format != Defaults::default_format() {
            overlay.format
        } else {
            base.format
        },
    }
}

fn merge_prompt(base: Prompt, overlay: Prompt) -> Prompt {
    Prompt {
        sequence: if overlay.sequence != Prompt::default_sequence() {
            overlay.sequence
        } else {
            base.sequence
        },
        target: if overlay.target != Prompt::default_target() {
            overlay.target
        } else {
            base.target
        },
    }
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("seqprobe/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;
    let root = find_repo_root(&cwd).unwrap_or(cwd);
    Ok(Some(root.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(format) = env.format {
        config.defaults.format = format;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_uses_defaults_when_no_files() {
        let config = Config::load_with_layers(None, None, EnvOverrides::default())
            .expect("load default config");
        assert_eq!(config.defaults.format, "text");
        assert!(config.prompt.target.contains("positive integer"));
    }

    #[test]
    fn merge_global_and_workspace() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let global = temp.path().join("config.toml");
        fs::write(
            &global,
            r#"
[defaults]
format = "json"
[prompt]
sequence = "numbers> "
"#,
        )?;

        let workspace = temp.path().join("workspace.toml");
        fs::write(
            &workspace,
            r#"
[prompt]
target = "target> "
"#,
        )?;

        let config = Config::load_with_layers(
            Some(global),
            Some(workspace),
            EnvOverrides::default(),
        )?;

        assert_eq!(config.defaults.format, "json");
        assert_eq!(config.prompt.sequence, "numbers> ");
        assert_eq!(config.prompt.target, "target> ");
        Ok(())
    }

    #[test]
    fn workspace_overrides_global() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let global = temp.path().join("config.toml");
        fs::write(&global, "[defaults]\nformat = \"json\"\n")?;

        let workspace = temp.path().join("workspace.toml");
        fs::write(&workspace, "[defaults]\nformat = \"text\"\n")?;

        let config = Config::load_with_layers(
            Some(global),
            Some(workspace),
            EnvOverrides::default(),
        )?;

        // Workspace restates the default, so the global value wins.
        assert_eq!(config.defaults.format, "json");
        Ok(())
    }

    #[test]
    fn env_overrides_win() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let global = temp.path().join("config.toml");
        fs::write(&global, "[defaults]\nformat = \"text\"\n")?;

        let config = Config::load_with_layers(
            Some(global),
            None,
            EnvOverrides::for_tests("json"),
        )?;

        assert_eq!(config.defaults.format, "json");
        Ok(())
    }

    #[test]
    fn missing_layer_files_are_skipped() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load_with_layers(
            Some(temp.path().join("absent.toml")),
            Some(temp.path().join("also-absent.toml")),
            EnvOverrides::default(),
        )?;
        assert_eq!(config, Config::load_with_layers(None, None, EnvOverrides::default())?);
        Ok(())
    }
}

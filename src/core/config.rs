//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.aichat/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::{DEFAULT_TITLE, SidebarState, ThemeMode};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<ThemeMode>,
    pub sidebar: Option<SidebarState>,
    pub rag_enabled: Option<bool>,
    pub seed_messages: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WindowConfig {
    pub title: Option<String>,
    pub icon: Option<PathBuf>,
}

/// Values given on the command line. `None` / `false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<ThemeMode>,
    pub sidebar: Option<SidebarState>,
    pub rag: bool,
}

pub const DEFAULT_ICON_PATH: &str = "assets/icon.png";
pub const THEME_ENV_VAR: &str = "AICHAT_THEME";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub title: String,
    pub window_icon: Option<PathBuf>,
    pub theme: ThemeMode,
    pub sidebar: SidebarState,
    pub rag_enabled: bool,
    pub seed_messages: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&AppConfig::default(), &CliOverrides::default(), None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.aichat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".aichat").join("config.toml"))
}

/// Load config from `~/.aichat/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AppConfig::default()`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(AppConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit location.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# AI Chat Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"            # "light" or "dark" (or AICHAT_THEME env var)
# sidebar = "collapsed"      # "collapsed" or "expanded"
# rag_enabled = false
# seed_messages = true       # show the demo conversation on startup

# [window]
# title = "AI Chat"
# icon = "assets/icon.png"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AppConfig, cli: &CliOverrides) -> ResolvedConfig {
    let env_theme = std::env::var(THEME_ENV_VAR).ok();
    resolve_with_env(config, cli, env_theme.as_deref())
}

fn resolve_with_env(
    config: &AppConfig,
    cli: &CliOverrides,
    env_theme: Option<&str>,
) -> ResolvedConfig {
    let env_theme = env_theme.and_then(|raw| match ThemeMode::from_str(raw, true) {
        Ok(theme) => Some(theme),
        Err(_) => {
            warn!("Ignoring {}={:?}: expected light or dark", THEME_ENV_VAR, raw);
            None
        }
    });

    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or(env_theme)
        .or(config.general.theme)
        .unwrap_or_default();

    let sidebar = cli.sidebar.or(config.general.sidebar).unwrap_or_default();

    // --rag can only switch the flag on
    let rag_enabled = cli.rag || config.general.rag_enabled.unwrap_or(false);

    let title = config
        .window
        .title
        .clone()
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let window_icon = Some(
        config
            .window
            .icon
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ICON_PATH)),
    );

    ResolvedConfig {
        title,
        window_icon,
        theme,
        sidebar,
        rag_enabled,
        seed_messages: config.general.seed_messages.unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&AppConfig::default(), &CliOverrides::default(), None);
        assert_eq!(resolved.title, "AI Chat");
        assert_eq!(resolved.theme, ThemeMode::Light);
        assert_eq!(resolved.sidebar, SidebarState::Collapsed);
        assert!(!resolved.rag_enabled);
        assert!(resolved.seed_messages);
        assert_eq!(resolved.window_icon, Some(PathBuf::from(DEFAULT_ICON_PATH)));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AppConfig {
            general: GeneralConfig {
                theme: Some(ThemeMode::Dark),
                sidebar: Some(SidebarState::Expanded),
                rag_enabled: Some(true),
                seed_messages: Some(false),
            },
            window: WindowConfig {
                title: Some("RADgeni".to_string()),
                icon: Some(PathBuf::from("assets/radgeni-tooltip.png")),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), None);
        assert_eq!(resolved.theme, ThemeMode::Dark);
        assert_eq!(resolved.sidebar, SidebarState::Expanded);
        assert!(resolved.rag_enabled);
        assert!(!resolved.seed_messages);
        assert_eq!(resolved.title, "RADgeni");
        assert_eq!(
            resolved.window_icon,
            Some(PathBuf::from("assets/radgeni-tooltip.png"))
        );
    }

    #[test]
    fn test_env_theme_beats_config_but_not_cli() {
        let config = AppConfig {
            general: GeneralConfig {
                theme: Some(ThemeMode::Light),
                ..Default::default()
            },
            ..Default::default()
        };
        let from_env = resolve_with_env(&config, &CliOverrides::default(), Some("DARK"));
        assert_eq!(from_env.theme, ThemeMode::Dark);

        let cli = CliOverrides {
            theme: Some(ThemeMode::Light),
            ..Default::default()
        };
        let from_cli = resolve_with_env(&config, &cli, Some("dark"));
        assert_eq!(from_cli.theme, ThemeMode::Light);
    }

    #[test]
    fn test_invalid_env_theme_is_ignored() {
        let resolved =
            resolve_with_env(&AppConfig::default(), &CliOverrides::default(), Some("purple"));
        assert_eq!(resolved.theme, ThemeMode::Light);
    }

    #[test]
    fn test_cli_sidebar_wins() {
        let config = AppConfig {
            general: GeneralConfig {
                sidebar: Some(SidebarState::Collapsed),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            sidebar: Some(SidebarState::Expanded),
            rag: true,
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, None);
        assert_eq!(resolved.sidebar, SidebarState::Expanded);
        assert!(resolved.rag_enabled);
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
theme = "dark"
sidebar = "expanded"
rag_enabled = true
seed_messages = false

[window]
title = "AI Chat"
icon = "assets/icon.png"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(ThemeMode::Dark));
        assert_eq!(config.general.sidebar, Some(SidebarState::Expanded));
        assert_eq!(config.general.rag_enabled, Some(true));
        assert_eq!(config.window.icon, Some(PathBuf::from("assets/icon.png")));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[window]
title = "My Chat"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.window.title.as_deref(), Some("My Chat"));
        assert!(config.general.theme.is_none());
        assert!(config.window.icon.is_none());
    }

    #[test]
    fn test_bad_theme_value_is_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[general]\ntheme = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nrag_enabled = true\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.rag_enabled, Some(true));
    }

    #[test]
    fn test_load_config_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_generate_default_config_is_all_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        generate_default_config(&path);
        let config = load_config_from(&path).unwrap();
        assert!(config.general.theme.is_none());
        assert!(config.window.title.is_none());
    }
}

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// User preferences from `config.toml`; command-line flags win over these
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) no_git: bool,
    #[serde(default)]
    pub(crate) pause: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) docs_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) plan: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // ~/.config/docshift/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("docshift").join("config.toml"));
        }

        // Platform config dir (Application Support on macOS, AppData on Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("docshift").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // ~/.docshift.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".docshift.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_are_docshift_specific() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        for p in &paths {
            assert!(p.to_string_lossy().contains("docshift"), "{}", p.display());
        }
    }

    #[test]
    fn parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
debug = true
no_git = true
pause = true
color = "never"
docs_dir = "documentation"
plan = "plans/rs-system.toml"
timezone = "Asia/Taipei"
"#,
        )
        .unwrap();
        assert!(config.debug);
        assert!(config.no_git);
        assert!(config.pause);
        assert!(!config.no_color);
        assert_eq!(config.color, Some(ConfigColorMode::Never));
        assert_eq!(config.docs_dir, Some(PathBuf::from("documentation")));
        assert_eq!(config.plan, Some(PathBuf::from("plans/rs-system.toml")));
        assert_eq!(config.timezone.as_deref(), Some("Asia/Taipei"));
    }

    #[test]
    fn empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.debug);
        assert!(config.color.is_none());
        assert!(config.plan.is_none());
    }

    #[test]
    fn bad_color_value_is_rejected() {
        assert!(toml::from_str::<Config>("color = \"sometimes\"").is_err());
    }
}

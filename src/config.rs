use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tutorial_parse::MarkdownOptions;

/// File name looked up in the current directory when `--config` is not given.
pub const CONFIG_FILE: &str = "tutorialize.json";

/// Top-level tutorialize.json schema.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorializeConfig {
    /// Directory template names are resolved against.
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Template used when `-t` is not given.
    #[serde(default)]
    pub template: Option<String>,

    #[serde(default)]
    pub markdown: MarkdownOptions,
}

impl Default for TutorializeConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            template: None,
            markdown: MarkdownOptions::default(),
        }
    }
}

fn default_template_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Load config from `explicit`, or from tutorialize.json in `cwd`, or return
/// defaults if that file is missing. An explicit path must exist.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<TutorializeConfig> {
    let (config_path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (cwd.join(CONFIG_FILE), false),
    };

    if !required && !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(TutorializeConfig::default());
    }

    let raw = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: TutorializeConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "templateDir": "templates",
            "template": "tutorial.html",
            "markdown": {
                "tables": false,
                "footnotes": true,
                "smartPunctuation": true
            }
        }"#;

        let config: TutorializeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.template.as_deref(), Some("tutorial.html"));
        assert!(!config.markdown.tables);
        assert!(config.markdown.footnotes);
        assert!(config.markdown.smart_punctuation);
        // Unspecified markdown options keep their defaults.
        assert!(config.markdown.strikethrough);
    }

    #[test]
    fn test_defaults() {
        let config: TutorializeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.template_dir, PathBuf::from("."));
        assert!(config.template.is_none());
        assert_eq!(config.markdown, MarkdownOptions::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = std::env::temp_dir().join("tutorialize-config-test-missing");
        let _ = std::fs::remove_dir_all(&dir);
        let config = load_config(None, &dir).unwrap();
        assert!(config.template.is_none());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = std::env::temp_dir().join("tutorialize-config-test-absent.json");
        let _ = std::fs::remove_file(&path);
        assert!(load_config(Some(&path), Path::new(".")).is_err());
    }

    #[test]
    fn test_load_from_cwd() {
        let dir = std::env::temp_dir().join("tutorialize-config-test-cwd");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), r#"{ "template": "page.html" }"#).unwrap();

        let config = load_config(None, &dir).unwrap();
        assert_eq!(config.template.as_deref(), Some("page.html"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}

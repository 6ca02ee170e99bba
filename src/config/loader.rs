//! Configuration file discovery and loading.

use crate::config::schema::NotifierConfig;
use crate::error::{NotifierError, Result};
use crate::ui::MAX_PADDING;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked for in the project root.
pub const CONFIG_FILE_NAME: &str = ".update-notifier.yml";

/// Find `.update-notifier.yml` in the project root.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load configuration from a specific file.
pub fn load_config_file(path: &Path) -> Result<NotifierConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NotifierError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            NotifierError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into NotifierConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<NotifierConfig> {
    if content.trim().is_empty() {
        return Ok(NotifierConfig::default());
    }

    let config: NotifierConfig =
        serde_yaml::from_str(content).map_err(|e| NotifierError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if config.box_style.padding > MAX_PADDING {
        return Err(NotifierError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: format!(
                "box.padding must be at most {}, got {}",
                MAX_PADDING, config.box_style.padding
            ),
        });
    }

    Ok(config)
}

/// Load configuration for a run.
///
/// An explicit path must exist. Without one, the project root is searched
/// and a missing file yields the defaults.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<NotifierConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match find_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(NotifierConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_config_in_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "package_name: pkg").unwrap();

        let path = find_config(temp.path()).unwrap();
        assert!(path.ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn find_config_returns_none_when_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config(temp.path()).is_none());
    }

    #[test]
    fn load_config_file_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config_file(&temp.path().join("missing.yml"));
        assert!(matches!(result, Err(NotifierError::ConfigNotFound { .. })));
    }

    #[test]
    fn parse_config_invalid_yaml() {
        let result = parse_config("package_name: [unclosed", Path::new("bad.yml"));
        match result {
            Err(NotifierError::ConfigParseError { path, .. }) => {
                assert_eq!(path, PathBuf::from("bad.yml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn parse_config_rejects_oversized_padding() {
        let result = parse_config("box:\n  padding: 1000\n", Path::new("big.yml"));
        match result {
            Err(NotifierError::ConfigParseError { message, .. }) => {
                assert!(message.contains("box.padding must be at most 32"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        let result = parse_config(
            "box:\n  padding: 18446744073709551615\n",
            Path::new("huge.yml"),
        );
        assert!(matches!(result, Err(NotifierError::ConfigParseError { .. })));

        let config = parse_config("box:\n  padding: 32\n", Path::new("ok.yml")).unwrap();
        assert_eq!(config.box_style.padding, MAX_PADDING);
    }

    #[test]
    fn parse_config_empty_is_default() {
        let config = parse_config("  \n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, NotifierConfig::default());
    }

    #[test]
    fn load_config_discovers_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "package_name: found").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.package_name.as_deref(), Some("found"));
    }

    #[test]
    fn load_config_without_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, NotifierConfig::default());
    }

    #[test]
    fn load_config_override_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "package_name: project").unwrap();
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "package_name: custom").unwrap();

        let config = load_config(temp.path(), Some(&custom)).unwrap();
        assert_eq!(config.package_name.as_deref(), Some("custom"));
    }

    #[test]
    fn load_config_missing_override_errors() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(&temp.path().join("nope.yml")));
        assert!(matches!(result, Err(NotifierError::ConfigNotFound { .. })));
    }
}

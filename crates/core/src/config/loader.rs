use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("MEDIASHELF_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[common]
success_output_folder = "/library"
link_mode = 2

[name_rule]
location_rule = "studio + '/' + number"
max_title_len = 50
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(
            config.common.success_output_folder,
            PathBuf::from("/library")
        );
        assert_eq!(config.common.link_mode, 2);
        assert_eq!(config.name_rule.location_rule, "studio + '/' + number");
        assert_eq!(config.name_rule.max_title_len, 50);
    }

    #[test]
    fn test_load_config_from_str_empty_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.common.success_output_folder, PathBuf::from("output"));
        assert_eq!(config.name_rule.location_rule, "actor + '/' + number");
        assert_eq!(config.escape.literals, "\\()");
    }

    #[test]
    fn test_load_config_from_str_invalid() {
        let result = load_config_from_str("[common]\nlink_mode = \"not an int\"");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[common]
success_output_folder = "/library"
failed_output_folder = "/library/.failed"
failed_move = true

[escape]
literals = "():"
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(
            config.common.failed_output_folder,
            PathBuf::from("/library/.failed")
        );
        assert!(config.common.failed_move);
        assert_eq!(config.escape.literals, "():");
    }
}

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Output folders are not empty
/// - The location rule is not blank
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.common.success_output_folder.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "common.success_output_folder cannot be empty".to_string(),
        ));
    }

    if config.common.failed_output_folder.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "common.failed_output_folder cannot be empty".to_string(),
        ));
    }

    if config.name_rule.location_rule.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "name_rule.location_rule cannot be blank".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_success_folder_fails() {
        let mut config = Config::default();
        config.common.success_output_folder = PathBuf::new();

        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_empty_failed_folder_fails() {
        let mut config = Config::default();
        config.common.failed_output_folder = PathBuf::new();

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_blank_rule_fails() {
        let mut config = Config::default();
        config.name_rule.location_rule = "   ".to_string();

        assert!(validate_config(&config).is_err());
    }
}

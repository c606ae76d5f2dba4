//! Configuration validation integration tests
//!
//! Verifies that configuration validates correctly and fails
//! appropriately for invalid configurations.

#[cfg(test)]
mod tests {
    use saanvika_authz::config::models::{AuthzConfig, DirectoryConfig, LogFormat, LoggingConfig};
    use saanvika_authz::config::{Config, Validate};
    use saanvika_authz::AuthzError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_valid_config() -> AuthzConfig {
        AuthzConfig {
            directory: DirectoryConfig {
                page_size: 25,
                max_page_size: 50,
                refresh_interval_secs: 30,
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: LogFormat::Json,
            },
        }
    }

    // ==================== DirectoryConfig Validation ====================

    #[test]
    fn test_valid_config() {
        assert!(create_valid_config().validate().is_ok());
        assert!(AuthzConfig::default().is_valid());
    }

    #[test]
    fn test_page_size_zero() {
        let mut config = create_valid_config();
        config.directory.page_size = 0;

        let result = config.validate();
        assert!(result.unwrap_err().contains("page_size"));
    }

    #[test]
    fn test_page_size_above_maximum() {
        let mut config = create_valid_config();
        config.directory.page_size = 51;

        let result = config.validate();
        assert!(result.unwrap_err().contains("cannot exceed"));
    }

    #[test]
    fn test_refresh_interval_bounds() {
        let mut config = create_valid_config();
        config.directory.refresh_interval_secs = 0;
        assert!(!config.directory.is_valid());

        config.directory.refresh_interval_secs = 86_400;
        assert!(config.validate().is_ok());

        config.directory.refresh_interval_secs = 86_401;
        assert!(config.validate().unwrap_err().contains("one day"));
    }

    // ==================== LoggingConfig Validation ====================

    #[test]
    fn test_log_levels() {
        for level in ["trace", "DEBUG", "Info", "warn", "error"] {
            let config = LoggingConfig {
                level: level.to_string(),
                format: LogFormat::Text,
            };
            assert!(config.validate().is_ok(), "{level}");
        }

        let config = LoggingConfig {
            level: "verbose".to_string(),
            format: LogFormat::Text,
        };
        assert!(config.validate().unwrap_err().contains("verbose"));
    }

    // ==================== Loading ====================

    #[tokio::test]
    async fn test_invalid_file_maps_to_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"directory:\n  page_size: 500\n  max_page_size: 100\n")
            .unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, AuthzError::Config(msg) if msg.contains("Directory config error")));
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"logging:\n  format: json\n").unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.logging().format, LogFormat::Json);
        assert_eq!(config.logging().level, "info");
        assert_eq!(config.directory(), &DirectoryConfig::default());
    }

    #[test]
    fn test_environment_lookup() {
        let config = AuthzConfig::from_lookup(|key| match key {
            "SAANVIKA_PAGE_SIZE" => Some("10".to_string()),
            "SAANVIKA_LOG_FORMAT" => Some("JSON".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.directory.page_size, 10);
        assert_eq!(config.directory.max_page_size, 100);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = Config {
            authz: create_valid_config(),
        };
        let overrides = Config {
            authz: AuthzConfig {
                directory: DirectoryConfig {
                    page_size: 5,
                    ..DirectoryConfig::default()
                },
                logging: LoggingConfig::default(),
            },
        };

        let merged = base.merge(overrides);
        assert_eq!(merged.directory().page_size, 5);
        assert_eq!(merged.directory().max_page_size, 50);
        assert_eq!(merged.logging().level, "warn");
    }
}

//! Unit tests for configuration parsing.

#[cfg(test)]
mod config_tests {
    use crate::config::AppConfig;
    use crate::constants::{backend, workflow};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.backend.base_url, backend::DEFAULT_BASE_URL);
        assert_eq!(
            config.backend.request_timeout_secs,
            backend::DEFAULT_TIMEOUT_SECS
        );
        assert_eq!(config.user_id, workflow::DEFAULT_USER_ID);
        assert_eq!(config.bus_capacity, workflow::DEFAULT_BUS_CAPACITY);
    }

    #[test]
    fn test_full_config_deserialize() {
        let yaml = r#"
backend:
  base_url: "http://insight.internal:9000"
  request_timeout_secs: 5
user_id: "trader42"
bus_capacity: 8
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.backend.base_url, "http://insight.internal:9000");
        assert_eq!(config.backend.request_timeout_secs, 5);
        assert_eq!(config.user_id, "trader42");
        assert_eq!(config.bus_capacity, 8);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let yaml = r#"
backend:
  base_url: "http://localhost:8123"
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.backend.base_url, "http://localhost:8123");
        assert_eq!(
            config.backend.request_timeout_secs,
            backend::DEFAULT_TIMEOUT_SECS
        );
        assert_eq!(config.user_id, workflow::DEFAULT_USER_ID);
    }

    #[test]
    fn test_bom_is_stripped() {
        let yaml = "\u{feff}user_id: \"bom_user\"\n";
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.user_id, "bom_user");
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("backend: [not, a, map").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::load("definitely-not-here.yaml").is_err());
    }
}

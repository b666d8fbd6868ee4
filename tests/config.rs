#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use vigil::libs::config::{AutomationConfig, Config, EngineConfig};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata
    /// directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.engine.is_none());
        assert!(config.automation.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.engine.is_none());
        assert!(config.automation.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            engine: Some(EngineConfig {
                interval: 90,
                max_failures: 5,
            }),
            automation: Some(AutomationConfig {
                target_app: "Slack".to_string(),
                pause_apps: vec!["Terminal".to_string()],
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.engine, config.engine);
        assert_eq!(loaded.automation, config.automation);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_engine_defaults(_ctx: &mut ConfigTestContext) {
        let engine = EngineConfig::default();
        assert_eq!(engine.interval, 240);
        assert_eq!(engine.max_failures, 3);
        assert!(engine.validate().is_ok());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_automation_defaults(_ctx: &mut ConfigTestContext) {
        let automation = AutomationConfig::default();
        assert_eq!(automation.target_app, "Microsoft Teams");
        assert!(automation.pause_apps.iter().any(|app| app == "Terminal"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_validate_rejects_zero_interval(_ctx: &mut ConfigTestContext) {
        let engine = EngineConfig {
            interval: 0,
            max_failures: 3,
        };
        assert!(engine.validate().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_validate_rejects_zero_failure_threshold(_ctx: &mut ConfigTestContext) {
        let engine = EngineConfig {
            interval: 60,
            max_failures: 0,
        };
        assert!(engine.validate().is_err());
    }
}

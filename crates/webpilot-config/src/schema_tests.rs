    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_body_mb, 50);
    }

    #[test]
    fn test_max_body_bytes() {
        let config = ServerConfig {
            max_body_mb: 2,
            ..ServerConfig::default()
        };
        assert_eq!(config.max_body_bytes(), 2 * 1024 * 1024);
    }

    #[test]
    fn test_default_gemini_config() {
        let config = GeminiConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-1.5-flash");
        assert!(config.base_url.is_none());
        assert_eq!(config.temperature, 0.0);
    }

    #[test]
    fn test_default_engine_config() {
        let config = EngineConfig::default();
        assert_eq!(config.dom_char_budget, 25_000);
        assert_eq!(config.generation_timeout_secs, 9);
    }

    #[test]
    fn test_root_config_default_sections() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.engine.dom_char_budget, 25_000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [gemini]
            model = "gemini-2.0-flash"
            "#,
        )
        .unwrap();
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.engine.generation_timeout_secs, 9);
    }

    #[test]
    fn test_serialize_skips_absent_key() {
        let config = GeminiConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(!toml.contains("api_key"));
        assert!(!toml.contains("base_url"));
    }

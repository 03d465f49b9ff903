mod common;

#[cfg(test)]
pub mod config_tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use educonnect::common::ConfigError;
    use leptos::config::LeptosOptions;
    use educonnect::config::{DEFAULT_LOG_FILTER, ServerConfig};

    fn default_addr() -> SocketAddr {
        "127.0.0.1:3000".parse().unwrap()
    }

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned(), default_addr(), "target/site")
    }

    #[test]
    fn test_config_defaults_success() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr, default_addr());
        assert_eq!(config.site_root, PathBuf::from("target/site"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.pkg_dir("pkg"), PathBuf::from("target/site/pkg"));
    }

    #[test]
    fn test_config_overrides_success() {
        let config = load(&[
            ("BIND_ADDR", " 0.0.0.0:8080 "),
            ("STATIC_DIR", "/srv/educonnect"),
            ("RUST_LOG", "educonnect=debug"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.site_root, PathBuf::from("/srv/educonnect"));
        assert_eq!(config.log_filter, "educonnect=debug");
    }

    #[test]
    fn test_config_blank_values_fall_back_to_defaults() {
        let config = load(&[("BIND_ADDR", "  "), ("RUST_LOG", "")]).unwrap();
        assert_eq!(config.bind_addr, default_addr());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_config_leptos_options_use_overrides() {
        let defaults = LeptosOptions::builder()
            .output_name("educonnect")
            .site_root("target/site")
            .site_addr(default_addr())
            .build();
        let config = load(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("STATIC_DIR", "/srv/educonnect"),
        ])
        .unwrap();

        let options = config.leptos_options(&defaults);
        assert_eq!(&*options.site_root, "/srv/educonnect");
        assert_eq!(options.site_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(&*options.output_name, "educonnect");
        assert_eq!(options.site_pkg_dir, defaults.site_pkg_dir);
        assert_eq!(&*defaults.site_root, "target/site");
    }

    #[test]
    fn test_config_fails_on_invalid_bind_addr() {
        let err = load(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"
        ));
        assert!(err.to_string().contains("localhost"));
    }

    #[test]
    fn test_config_fails_on_empty_site_root() {
        let err = ServerConfig::from_lookup(|_| None, default_addr(), "").unwrap_err();
        assert!(matches!(err, ConfigError::Empty("STATIC_DIR")));
    }
}

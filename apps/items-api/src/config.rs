use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("HOST", None::<&str>),
                ("PORT", None::<&str>),
                ("CORS_ALLOWED_ORIGIN", None::<&str>),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "items_api");
                assert_eq!(config.server.port, 3000);
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_config_from_env_rejects_bad_port() {
        temp_env::with_var("PORT", Some("three-thousand"), || {
            assert!(Config::from_env().is_err());
        });
    }
}

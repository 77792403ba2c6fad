use super::parsing::{
    env_optional, env_or_default, parse_bool, parse_cors_origins, parse_environment,
    parse_ssl_mode, parse_u16, parse_u32, parse_u64,
};
use super::types::{
    ConfigError, CorsSettings, DatabaseSettings, RuntimeSettings, ServerHost, ServerPort,
    ServerSettings, Settings, TelemetrySettings,
};

impl Settings {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let host = env_or_default("STUDYHUB_HOST", "0.0.0.0");
        let port = env_or_default("PORT", "3000");

        let environment =
            parse_environment(env_optional("STUDYHUB_ENV").or_else(|| env_optional("ENVIRONMENT")));

        let cors_origins = parse_cors_origins(env_optional("BACKEND_CORS_ORIGINS"))?;

        let db_host = env_or_default("DB_HOST", "localhost");
        let db_port = parse_u16("DB_PORT", env_or_default("DB_PORT", "5432"))?;
        let db_user = env_or_default("DB_USER", "studyhub");
        let db_password = env_or_default("DB_PASSWORD", "");
        let db_name = env_or_default("DB_NAME", "studyhub");
        let database_url = env_optional("DATABASE_URL");
        let ssl_mode = parse_ssl_mode(env_or_default("DB_SSL_MODE", "prefer"))?;
        let max_connections =
            parse_u32("DB_MAX_CONNECTIONS", env_or_default("DB_MAX_CONNECTIONS", "10"))?;
        let acquire_timeout_seconds = parse_u64(
            "DB_ACQUIRE_TIMEOUT_SECONDS",
            env_or_default("DB_ACQUIRE_TIMEOUT_SECONDS", "30"),
        )?;

        let log_level = env_or_default("STUDYHUB_LOG_LEVEL", "info");
        let json = env_optional("STUDYHUB_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);
        let prometheus_enabled =
            env_optional("PROMETHEUS_ENABLED").map(|value| parse_bool(&value)).unwrap_or(false);

        let settings = Self {
            server: ServerSettings {
                host: ServerHost::parse(host)?,
                port: ServerPort::parse(port)?,
            },
            runtime: RuntimeSettings { environment },
            cors: CorsSettings { origins: cors_origins },
            database: DatabaseSettings {
                host: db_host,
                port: db_port,
                user: db_user,
                password: db_password,
                name: db_name,
                database_url,
                ssl_mode,
                max_connections,
                acquire_timeout_seconds,
            },
            telemetry: TelemetrySettings { log_level, json, prometheus_enabled },
        };

        settings.validate()?;
        Ok(settings)
    }

    pub(crate) fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host.0, self.server.port.0)
    }

    pub(crate) fn server_host(&self) -> &str {
        &self.server.host.0
    }

    pub(crate) fn server_port(&self) -> u16 {
        self.server.port.0
    }

    pub(crate) fn cors(&self) -> &CorsSettings {
        &self.cors
    }

    pub(crate) fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    pub(crate) fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    pub(crate) fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        if self.runtime.environment.is_production()
            && self.database.database_url.is_none()
            && self.database.password.is_empty()
        {
            return Err(ConfigError::Missing("DB_PASSWORD"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::config::{Environment, Settings};
    use crate::test_support;

    const VARS: &[&str] = &[
        "STUDYHUB_HOST",
        "PORT",
        "STUDYHUB_ENV",
        "ENVIRONMENT",
        "DATABASE_URL",
        "DB_HOST",
        "DB_PORT",
        "DB_USER",
        "DB_PASSWORD",
        "DB_NAME",
        "DB_SSL_MODE",
        "DB_MAX_CONNECTIONS",
        "BACKEND_CORS_ORIGINS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[tokio::test]
    async fn defaults_match_local_development() {
        let _guard = test_support::env_lock().await;
        clear_env();

        let settings = Settings::load().expect("settings");
        assert_eq!(settings.server_addr(), "0.0.0.0:3000");
        assert_eq!(settings.runtime().environment, Environment::Development);
        assert_eq!(settings.database().max_connections, 10);
        assert_eq!(
            settings.database().database_url(),
            "postgresql://studyhub:@localhost:5432/studyhub"
        );
        assert!(settings.cors().origins.is_empty());
    }

    #[tokio::test]
    async fn database_url_overrides_parts() {
        let _guard = test_support::env_lock().await;
        clear_env();
        std::env::set_var("DB_HOST", "db.internal");
        std::env::set_var("DATABASE_URL", "postgresql://u:p@elsewhere:6543/app");

        let settings = Settings::load().expect("settings");
        assert_eq!(settings.database().database_url(), "postgresql://u:p@elsewhere:6543/app");
        clear_env();
    }

    #[tokio::test]
    async fn production_requires_database_password() {
        let _guard = test_support::env_lock().await;
        clear_env();
        std::env::set_var("STUDYHUB_ENV", "production");

        let err = Settings::load().expect_err("missing password");
        assert_eq!(err.to_string(), "missing required setting DB_PASSWORD");

        std::env::set_var("DB_PASSWORD", "secret");
        assert!(Settings::load().is_ok());
        clear_env();
    }

    #[tokio::test]
    async fn rejects_zero_pool_and_bad_port() {
        let _guard = test_support::env_lock().await;
        clear_env();
        std::env::set_var("DB_MAX_CONNECTIONS", "0");
        assert!(Settings::load().is_err());

        clear_env();
        std::env::set_var("PORT", "0");
        assert!(Settings::load().is_err());
        clear_env();
    }
}

//! Configuration management

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{ENV_DEVELOPMENT, ENV_PRODUCTION};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub csrf: CsrfSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub cors_origin: String,
}

#[derive(Deserialize, Clone)]
pub struct CsrfSettings {
    /// Hashed into the token encryption key.
    pub token_secret: String,
    /// Bearer value required by the issuance endpoint.
    pub issuer_secret: String,
    #[serde(default)]
    pub excluded_paths: Vec<String>,
}

impl std::fmt::Debug for CsrfSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsrfSettings")
            .field("token_secret", &"<redacted>")
            .field("issuer_secret", &"<redacted>")
            .field("excluded_paths", &self.excluded_paths)
            .finish()
    }
}

impl AppSettings {
    /// `Secure` cookies are only issued when this holds.
    pub fn is_production(&self) -> bool {
        self.env == ENV_PRODUCTION
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| ENV_DEVELOPMENT.into());
        let config = Self::defaults(&env)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Self::environment())
            .build()?;

        Self::from_config(config)
    }

    /// `CSRF__EXCLUDED_PATHS=/a,/b` becomes `csrf.excluded_paths = ["/a", "/b"]`.
    fn environment() -> Environment {
        Environment::default()
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("csrf.excluded_paths")
            .try_parsing(true)
    }

    fn defaults(env: &str) -> Result<ConfigBuilder<DefaultState>, AppError> {
        Ok(Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "csrf-server")?
            .set_default("app.cors_origin", "http://localhost:5173")?
            .set_default("csrf.token_secret", "")?
            .set_default("csrf.issuer_secret", "")?)
    }

    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Secrets are configuration faults at startup, never at request time.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.csrf.token_secret.is_empty() {
            return Err(AppError::MissingSecret("csrf.token_secret"));
        }
        if self.csrf.issuer_secret.is_empty() {
            return Err(AppError::MissingSecret("csrf.issuer_secret"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ConfigBuilder<DefaultState> {
        AppConfig::defaults(ENV_DEVELOPMENT).unwrap()
    }

    #[test]
    fn test_defaults_with_secrets() {
        let config = builder()
            .set_override("csrf.token_secret", "token-secret")
            .unwrap()
            .set_override("csrf.issuer_secret", "issuer-secret")
            .unwrap()
            .build()
            .unwrap();

        let config = AppConfig::from_config(config).unwrap();
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.app.env, "development");
        assert!(!config.app.is_production());
        assert!(config.csrf.excluded_paths.is_empty());
    }

    #[test]
    fn test_excluded_paths_override() {
        let config = builder()
            .set_override("csrf.token_secret", "token-secret")
            .unwrap()
            .set_override("csrf.issuer_secret", "issuer-secret")
            .unwrap()
            .set_override("csrf.excluded_paths", vec!["/api/v1/webhook", "/api/v1/ping"])
            .unwrap()
            .build()
            .unwrap();

        let config = AppConfig::from_config(config).unwrap();
        assert_eq!(
            config.csrf.excluded_paths,
            vec!["/api/v1/webhook".to_string(), "/api/v1/ping".to_string()]
        );
    }

    fn from_env_vars(vars: &[(&str, &str)]) -> AppConfig {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = builder()
            .add_source(AppConfig::environment().source(Some(source)))
            .build()
            .unwrap();
        AppConfig::from_config(config).unwrap()
    }

    #[test]
    fn test_excluded_paths_from_env() {
        let secrets = [
            ("CSRF__TOKEN_SECRET", "token-secret"),
            ("CSRF__ISSUER_SECRET", "issuer-secret"),
        ];

        let mut vars = secrets.to_vec();
        vars.push(("CSRF__EXCLUDED_PATHS", "/api/v1/webhook,/api/v1/ping"));
        let config = from_env_vars(&vars);
        assert_eq!(config.csrf.token_secret, "token-secret");
        assert_eq!(
            config.csrf.excluded_paths,
            vec!["/api/v1/webhook".to_string(), "/api/v1/ping".to_string()]
        );

        let mut vars = secrets.to_vec();
        vars.push(("CSRF__EXCLUDED_PATHS", "/only"));
        let config = from_env_vars(&vars);
        assert_eq!(config.csrf.excluded_paths, vec!["/only".to_string()]);

        let config = from_env_vars(&secrets);
        assert!(config.csrf.excluded_paths.is_empty());
    }

    #[test]
    fn test_missing_token_secret_rejected() {
        let config = builder()
            .set_override("csrf.issuer_secret", "issuer-secret")
            .unwrap()
            .build()
            .unwrap();

        let err = AppConfig::from_config(config).unwrap_err();
        assert!(matches!(err, AppError::MissingSecret("csrf.token_secret")));
    }

    #[test]
    fn test_missing_issuer_secret_rejected() {
        let config = builder()
            .set_override("csrf.token_secret", "token-secret")
            .unwrap()
            .build()
            .unwrap();

        let err = AppConfig::from_config(config).unwrap_err();
        assert!(matches!(err, AppError::MissingSecret("csrf.issuer_secret")));
    }

    #[test]
    fn test_is_production_is_exact() {
        let mut settings = AppSettings {
            env: "production".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            name: "csrf-server".to_string(),
            cors_origin: "http://localhost:5173".to_string(),
        };
        assert!(settings.is_production());

        settings.env = "Production".to_string();
        assert!(!settings.is_production());

        settings.env = "staging".to_string();
        assert!(!settings.is_production());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let settings = CsrfSettings {
            token_secret: "super-secret".to_string(),
            issuer_secret: "also-secret".to_string(),
            excluded_paths: vec![],
        };
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("also-secret"));
    }
}

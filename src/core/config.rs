use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub swagger: SwaggerConfig,
    pub minio: MinIOConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Settings for the tokens this service issues on login
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: String,
    pub token_ttl: Duration,
    pub jwt_leeway: Duration,
}

// Keeps the signing secret out of logs
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"***")
            .field("issuer", &self.issuer)
            .field("token_ttl", &self.token_ttl)
            .field("jwt_leeway", &self.jwt_leeway)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// MinIO/S3 storage configuration for timing chart uploads
#[derive(Debug, Clone)]
pub struct MinIOConfig {
    /// MinIO/S3 endpoint URL
    pub endpoint: String,
    /// Endpoint used when building public file URLs (defaults to endpoint)
    pub public_endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    /// AWS region (for S3 compatibility)
    pub region: String,
    /// Prefix every uploaded object is stored under (e.g., "public")
    pub public_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            minio: MinIOConfig::from_env()?,
        })
    }
}

/// Parses `key` when set, otherwise falls back to `default`
fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        // Comma-separated; "*" allows any origin
        let cors_allowed_origins = env_or("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: env_or("HOST", "127.0.0.1"),
            port: parse_env("PORT", 3000)?,
            cors_allowed_origins,
            max_request_body_size: parse_env(
                "MAX_REQUEST_BODY_SIZE",
                Self::DEFAULT_MAX_REQUEST_BODY_SIZE,
            )?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            min_connections: parse_env("DB_MIN_CONNECTIONS", 1)?,
            acquire_timeout_secs: parse_env("DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            idle_timeout_secs: parse_env("DB_IDLE_TIMEOUT_SECS", 600)?,
            max_lifetime_secs: parse_env("DB_MAX_LIFETIME_SECS", 1800)?,
        })
    }
}

impl AuthConfig {
    const DEFAULT_TOKEN_TTL_SECS: u64 = 86400; // 1 day
    const DEFAULT_JWT_LEEWAY_SECS: u64 = 60;
    const MIN_SECRET_LEN: usize = 32;

    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET environment variable is required".to_string())?;

        if jwt_secret.len() < Self::MIN_SECRET_LEN {
            return Err(format!(
                "JWT_SECRET must be at least {} characters",
                Self::MIN_SECRET_LEN
            ));
        }

        Ok(Self {
            jwt_secret,
            issuer: env_or("JWT_ISSUER", "masjid-directory"),
            token_ttl: Duration::from_secs(parse_env(
                "JWT_EXPIRY_SECS",
                Self::DEFAULT_TOKEN_TTL_SECS,
            )?),
            jwt_leeway: Duration::from_secs(parse_env(
                "JWT_LEEWAY",
                Self::DEFAULT_JWT_LEEWAY_SECS,
            )?),
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());

        Ok(Self {
            username,
            password,
            title: env_or("SWAGGER_TITLE", "Masjid Directory API"),
            version: env_or("SWAGGER_VERSION", "0.1.0"),
            description: env_or(
                "SWAGGER_DESCRIPTION",
                "API documentation for the masjid directory",
            ),
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl MinIOConfig {
    pub fn from_env() -> Result<Self, String> {
        let endpoint = env_or("MINIO_ENDPOINT", "http://localhost:9000");

        Ok(Self {
            public_endpoint: env_or("MINIO_PUBLIC_ENDPOINT", &endpoint),
            endpoint,
            access_key: env_or("MINIO_ACCESS_KEY", "minioadmin"),
            secret_key: env_or("MINIO_SECRET_KEY", "minioadmin"),
            bucket: env_or("MINIO_BUCKET", "masjid-uploads"),
            region: env_or("MINIO_REGION", "us-east-1"),
            public_prefix: env_or("MINIO_PUBLIC_PREFIX", "public"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut config = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(config.credentials(), None);

        config.password = Some("secret".to_string());
        assert_eq!(config.credentials(), Some("admin:secret".to_string()));
    }

    #[test]
    fn test_auth_config_debug_hides_secret() {
        let config = AuthConfig {
            jwt_secret: "super-secret-signing-key-that-is-long".to_string(),
            issuer: "masjid-directory".to_string(),
            token_ttl: Duration::from_secs(60),
            jwt_leeway: Duration::from_secs(0),
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("masjid-directory"));
    }

    #[test]
    fn test_parse_env_falls_back_and_rejects_garbage() {
        assert_eq!(parse_env("MASJID_TEST_UNSET_NUMBER", 7u32), Ok(7));

        env::set_var("MASJID_TEST_BAD_NUMBER", "seven");
        assert_eq!(
            parse_env::<u32>("MASJID_TEST_BAD_NUMBER", 7),
            Err("MASJID_TEST_BAD_NUMBER must be a valid number".to_string())
        );
        env::remove_var("MASJID_TEST_BAD_NUMBER");
    }
}

use anyhow::Context;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Signing secret for the session cookie. Required at startup.
    pub secret: String,
    /// Only send the cookie over HTTPS. On in production.
    pub secure_cookies: bool,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Where the login guard sends anonymous requests.
    pub login_path: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Environment defaults first, specific env vars override.
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> anyhow::Result<Self> {
        self.database.url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        self.session.secret = env::var("SESSION_SECRET").context("SESSION_SECRET must be set")?;

        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().context("PORT must be a port number")?;
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECT_TIMEOUT_SECS") {
            self.database.connect_timeout_secs = v.parse().unwrap_or(self.database.connect_timeout_secs);
        }
        if let Ok(v) = env::var("SESSION_SECURE_COOKIES") {
            self.session.secure_cookies = v.parse().unwrap_or(self.session.secure_cookies);
        }
        if let Ok(v) = env::var("AUTH_LOGIN_PATH") {
            self.auth.login_path = v;
        }

        Ok(self)
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 5,
                connect_timeout_secs: 30,
            },
            session: SessionConfig {
                secret: String::new(),
                secure_cookies: false,
            },
            auth: AuthConfig {
                login_path: "/auth/login".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 20,
                connect_timeout_secs: 5,
            },
            session: SessionConfig {
                secret: String::new(),
                secure_cookies: true,
            },
            auth: AuthConfig {
                login_path: "/auth/login".to_string(),
            },
        }
    }
}

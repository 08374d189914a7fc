use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHasher};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::database::users::{User, UserStore};
use crate::state::AppState;
use crate::training::TrainingInfo;

/// How the fake store answers `find_by_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdLookup {
    Normal,
    /// The record vanished between login and lookup (deleted user).
    Missing,
    /// The store itself is unavailable.
    Error,
}

/// In-memory stand-in for the Postgres user store.
#[derive(Clone)]
pub struct FakeUserStore {
    users: Vec<User>,
    id_lookup: IdLookup,
    lookups: Arc<AtomicUsize>,
}

impl FakeUserStore {
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            id_lookup: IdLookup::Normal,
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_user(user: User) -> Self {
        let mut store = Self::empty();
        store.users.push(user);
        store
    }

    pub fn id_lookup(mut self, mode: IdLookup) -> Self {
        self.id_lookup = mode;
        self
    }

    /// Number of `find_by_id` calls observed.
    pub fn id_lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match self.id_lookup {
            IdLookup::Normal => Ok(self.users.iter().find(|user| user.id == id).cloned()),
            IdLookup::Missing => Ok(None),
            IdLookup::Error => anyhow::bail!("user store unavailable"),
        }
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self.users.iter().find(|user| user.email == email).cloned())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        if self.id_lookup == IdLookup::Error {
            anyhow::bail!("user store unavailable");
        }
        Ok(())
    }
}

pub fn password_hash(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("hashing test password")
        .to_string()
}

pub fn test_user(name: &str, email: &str, password: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: name.to_string(),
        password_hash: password_hash(password),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_config() -> AppConfig {
    use crate::config::{AuthConfig, DatabaseConfig, Environment, ServerConfig, SessionConfig};

    AppConfig {
        environment: Environment::Development,
        server: ServerConfig { port: 0 },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 1,
            connect_timeout_secs: 1,
        },
        session: SessionConfig {
            secret: "test-session-secret".to_string(),
            secure_cookies: false,
        },
        auth: AuthConfig {
            login_path: "/auth/login".to_string(),
        },
    }
}

pub fn state(store: FakeUserStore) -> AppState {
    AppState {
        users: Arc::new(store),
        training: Arc::new(TrainingInfo::dynamic_soccer()),
        config: Arc::new(test_config()),
    }
}

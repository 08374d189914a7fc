use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHasher};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use dynamic_training::app::app;
use dynamic_training::config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, ServerConfig, SessionConfig,
};
use dynamic_training::database::users::{User, UserStore};
use dynamic_training::state::AppState;
use dynamic_training::training::TrainingInfo;

pub const PASSWORD: &str = "kickoff-at-nine";

/// How the store answers `find_by_id` once a session holds a user id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdLookup {
    Normal,
    /// The record vanished between login and lookup (deleted user).
    Missing,
    /// The store itself is unavailable.
    Error,
}

#[derive(Clone)]
struct FakeUserStore {
    users: Vec<User>,
    id_lookup: IdLookup,
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
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

pub struct TestSite {
    pub app: Router,
    pub user: User,
}

pub fn spawn() -> TestSite {
    spawn_with(IdLookup::Normal)
}

pub fn spawn_with(id_lookup: IdLookup) -> TestSite {
    spawn_custom(id_lookup, "/auth/login")
}

pub fn spawn_custom(id_lookup: IdLookup, login_path: &str) -> TestSite {
    let user = seeded_user();
    let store = FakeUserStore {
        users: vec![user.clone()],
        id_lookup,
    };
    let state = AppState {
        users: Arc::new(store),
        training: Arc::new(TrainingInfo::dynamic_soccer()),
        config: Arc::new(test_config(login_path)),
    };
    TestSite {
        app: app(state),
        user,
    }
}

fn seeded_user() -> User {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(PASSWORD.as_bytes(), &salt)
        .expect("hashing test password")
        .to_string();
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: "coach@example.com".to_string(),
        name: "Coach Pat".to_string(),
        password_hash,
        created_at: now,
        updated_at: now,
    }
}

fn test_config(login_path: &str) -> AppConfig {
    AppConfig {
        environment: Environment::Development,
        server: ServerConfig { port: 0 },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 1,
            connect_timeout_secs: 1,
        },
        session: SessionConfig {
            secret: "integration-test-secret".to_string(),
            secure_cookies: false,
        },
        auth: AuthConfig {
            login_path: login_path.to_string(),
        },
    }
}

pub async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::get(path);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: &Router, path: &str, body: String, cookie: Option<&str>) -> Response {
    let mut request = Request::post(path).header(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
    );
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Log the seeded user in through the real form endpoint, returning the
/// session cookie to replay on later requests.
pub async fn log_in(site: &TestSite) -> String {
    let body = format!("email={}&password={}", site.user.email, PASSWORD);
    let response = post_form(&site.app, "/auth/login", body, None).await;
    assert!(
        response.status().is_redirection(),
        "login should redirect, got {}",
        response.status()
    );
    session_cookie(&response)
}

pub fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

#[allow(dead_code)]
pub fn assert_redirects_to(response: &Response, target: &str) {
    assert!(
        response.status().is_redirection(),
        "expected redirect, got {}",
        response.status()
    );
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        target,
        "unexpected redirect target"
    );
    // Redirects from the guard must not carry page content.
    assert_ne!(response.status(), StatusCode::OK);
}

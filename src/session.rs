use sha2::{Digest, Sha512};
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    MemoryStore, Session, SessionManagerLayer,
};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::database::users::User;

/// The one logical field this application keeps in the session payload.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Session middleware with a signed cookie, backed by an in-process store.
pub fn layer(config: &SessionConfig) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let store = MemoryStore::default();
    SessionManagerLayer::new(store)
        .with_secure(config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_signed(signing_key(&config.secret))
}

// Cookie signing wants a 64-byte key; SESSION_SECRET is operator-chosen and
// usually shorter, so stretch it through SHA-512 first.
fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Extract the logged-in user id from the session, if present.
///
/// Session-store errors read as "no user": a broken session must degrade to
/// an anonymous request, never fail it.
pub async fn user_id(session: &Session) -> Option<Uuid> {
    session.get::<Uuid>(SESSION_USER_ID_KEY).await.ok().flatten()
}

/// Write user identity into the session after successful authentication.
pub async fn set_user(session: &Session, user: &User) -> anyhow::Result<()> {
    session.insert(SESSION_USER_ID_KEY, user.id).await?;
    Ok(())
}

/// Clear the session on logout.
pub async fn clear(session: &Session) -> anyhow::Result<()> {
    session.flush().await?;
    Ok(())
}

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::database::users::User;
use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::session;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /auth/login - login form.
pub async fn login_form(Extension(current_user): Extension<CurrentUser>) -> Html<String> {
    Html(views::auth::login_page(&current_user, None))
}

/// POST /auth/login - verify credentials and bind the session to the user.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let user = state.users.find_by_email(&form.email).await?;

    match user.filter(|user| password_matches(user, &form.password)) {
        Some(user) => {
            session::set_user(&session, &user).await?;
            tracing::info!("user '{}' logged in", user.id);
            Ok(Redirect::to("/").into_response())
        }
        None => {
            // Same message for unknown email and wrong password.
            let page = views::auth::login_page(
                &CurrentUser(None),
                Some("Invalid email or password."),
            );
            Ok((StatusCode::UNAUTHORIZED, Html(page)).into_response())
        }
    }
}

fn password_matches(user: &User, password: &str) -> bool {
    match PasswordHash::new(&user.password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(err) => {
            tracing::warn!("stored password hash for '{}' is unparseable: {}", user.id, err);
            false
        }
    }
}

/// POST /auth/logout - drop the whole session.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    session::clear(&session).await?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn password_verification_round_trip() {
        let user = testing::test_user("Pat", "pat@example.com", "kickoff-at-9");

        assert!(password_matches(&user, "kickoff-at-9"));
        assert!(!password_matches(&user, "kickoff-at-10"));
    }

    #[test]
    fn garbage_hash_never_matches() {
        let mut user = testing::test_user("Pat", "pat@example.com", "pw");
        user.password_hash = "not-a-phc-string".to_string();

        assert!(!password_matches(&user, "pw"));
    }
}

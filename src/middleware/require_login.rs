use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::current_user::CurrentUser;
use crate::state::AppState;

/// Guard for routes that require a logged-in user.
///
/// Strictly a reader of the binding left by `current_user_middleware`: when
/// a user is present the pipeline proceeds unchanged, otherwise the guard
/// short-circuits with a redirect to the configured login path. It never
/// resolves the user itself. A missing binding (guard mounted without the
/// user-binding middleware) is treated as anonymous.
pub async fn require_login(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, impl IntoResponse> {
    let logged_in = request
        .extensions()
        .get::<CurrentUser>()
        .map(CurrentUser::is_logged_in)
        .unwrap_or(false);

    if logged_in {
        Ok(next.run(request).await)
    } else {
        Err(Redirect::to(&state.config.auth.login_path))
    }
}

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::database::users::User;
use crate::session;
use crate::state::AppState;

/// Per-request user binding. Always present on the request after
/// `current_user_middleware` has run: either the fully-resolved record or an
/// explicit absent value, never a raw id and never left unset. Handlers pass
/// the same value to the view layer, so pages and guards read one source of
/// truth.
#[derive(Clone, Debug, Default)]
pub struct CurrentUser(pub Option<User>);

impl CurrentUser {
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.0.is_some()
    }
}

/// Resolve "who is making this request" exactly once per request.
///
/// Mounted on every route, after the session layer and before any guard or
/// handler. A session id that fails to resolve (deleted user, store down)
/// degrades to an anonymous request rather than failing it; the pipeline
/// always continues.
pub async fn current_user_middleware(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Response {
    let resolved = match session::user_id(&session).await {
        Some(id) => match state.users.find_by_id(id).await {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                tracing::warn!("session references user '{}' that no longer exists", id);
                None
            }
            Err(err) => {
                tracing::warn!("user lookup for '{}' failed, continuing as anonymous: {}", id, err);
                None
            }
        },
        None => None,
    };

    request.extensions_mut().insert(CurrentUser(resolved));
    next.run(request).await
}

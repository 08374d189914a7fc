use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{auth, health, pages, todos};
use crate::middleware::{current_user_middleware, require_login};
use crate::session;
use crate::state::AppState;

/// Assemble the request pipeline.
///
/// Layer order matters: the session layer must run before the user-binding
/// middleware, which must run before any guard or handler. Static assets sit
/// outside the pipeline.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(auth_routes())
        .merge(todo_routes(state.clone()))
        .route("/health", get(health::health))
        .layer(from_fn_with_state(state.clone(), current_user_middleware))
        .layer(session::layer(&state.config.session))
        .layer(TraceLayer::new_for_http())
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state)
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/train", get(pages::train))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(auth::login_form).post(auth::login))
        .route("/auth/logout", post(auth::logout))
}

fn todo_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/todos/new", get(todos::new_todo))
        .route_layer(from_fn_with_state(state, require_login))
}

use axum::{extract::State, response::Html, Extension};

use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::views;

/// GET / - landing page, rendered from the injected training info.
pub async fn home(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Html<String> {
    Html(views::pages::home(&state.training, &current_user))
}

/// GET /train - session listing, same training info.
pub async fn train(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Html<String> {
    Html(views::pages::train(&state.training, &current_user))
}

use axum::response::Html;

/// GET /todos/new - placeholder behind the login guard. There is no todo
/// management yet; this returns a fixed body.
pub async fn new_todo() -> Html<&'static str> {
    Html("HMM - I need to get this pointed to another page")
}

use crate::middleware::CurrentUser;

use super::{escape, layout};

pub fn login_page(current_user: &CurrentUser, error: Option<&str>) -> String {
    let error_html = match error {
        Some(message) => format!("<p class=\"error\">{}</p>\n", escape(message)),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>Log In</h1>
{error_html}<form method="post" action="/auth/login">
  <label>Email <input type="email" name="email" required></label>
  <label>Password <input type="password" name="password" required></label>
  <button type="submit">Log In</button>
</form>"#
    );

    layout("Log In | Dynamic Training", current_user, &body)
}

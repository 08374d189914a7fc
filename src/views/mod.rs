//! Server-side page rendering. Plain functions that return markup; every
//! page goes through `layout`, which branches its nav on the current user.

use axum::http::StatusCode;

use crate::middleware::CurrentUser;

pub mod auth;
pub mod pages;

pub(crate) fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav(current_user: &CurrentUser) -> String {
    match current_user.user() {
        Some(user) => format!(
            concat!(
                r#"<span class="nav-user">Welcome, {name}</span> "#,
                r#"<a href="/todos/new">Todos</a> "#,
                r#"<form method="post" action="/auth/logout" class="inline">"#,
                r#"<button type="submit">Log Out</button></form>"#
            ),
            name = escape(&user.name)
        ),
        None => r#"<a href="/auth/login">Log In</a>"#.to_string(),
    }
}

pub(crate) fn layout(title: &str, current_user: &CurrentUser, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/public/styles.css">
</head>
<body>
  <nav>
    <a href="/">Home</a>
    <a href="/train">Training</a>
    {nav}
  </nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        nav = nav(current_user),
        body = body,
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!("<h1>{status}</h1>\n<p>{}</p>", escape(message));
    layout(&format!("{} | Dynamic Training", status.as_u16()), &CurrentUser(None), &body)
}

//! Incidental human-facing pages.

use axum::{extract::State, response::Html};

use crate::AppState;

/// Root page: a plain HTML listing of the current registry contents.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    let users = store.list(None).unwrap_or_default();

    let mut rows = String::new();
    for user in &users {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            user.id,
            escape(&user.name),
            escape(&user.email),
            escape(&user.city),
        ));
    }

    let body = if users.is_empty() {
        "<p>No users registered yet.</p>".to_string()
    } else {
        format!(
            "<table border=\"1\">\n<tr><th>Id</th><th>Name</th><th>Email</th><th>City</th></tr>\n{rows}</table>"
        )
    };

    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Roster</title></head>\n<body>\n<h1>Registered users</h1>\n{body}\n</body>\n</html>"
    ))
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

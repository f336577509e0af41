//! HTML page shell.
//!
//! The client application mounts inside `<main class="font-sans">` and
//! reads its auth context from the session endpoint.

use axum::{Router, response::Html, routing::get};

use crate::AppState;

/// Path the client auth context reads the session from.
pub const SESSION_ENDPOINT: &str = "/api/auth/session";

const SHELL: &str = r#"<!DOCTYPE html>
<html lang="pt">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <meta name="condos-session-endpoint" content="/api/auth/session" />
    <title>Condos</title>
  </head>
  <body>
    <main class="font-sans">
      <div id="root" data-session-endpoint="/api/auth/session"></div>
    </main>
    <script type="module">
      const root = document.getElementById("root");
      fetch(root.dataset.sessionEndpoint, { credentials: "include" })
        .then((res) => res.json())
        .then((session) => {
          root.dataset.authenticated = session ? "true" : "false";
          root.dispatchEvent(new CustomEvent("condos:session", { detail: session }));
        });
    </script>
  </body>
</html>
"#;

/// GET `/` - The page shell.
async fn index() -> Html<&'static str> {
    Html(SHELL)
}

/// Creates the shell routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_wraps_mount_point_and_names_session_endpoint() {
        assert!(SHELL.contains(r#"<main class="font-sans">"#));
        assert!(SHELL.contains(r#"id="root""#));
        assert!(SHELL.contains(SESSION_ENDPOINT));
    }
}

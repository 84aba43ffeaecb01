//! Handler: GET /
//!
//! Without parameters this serves the landing page. With a `data` query
//! parameter holding JSON text, it echoes the decoded value back.

use serde_json::{json, Value};

use crate::api::{Context, HandlerError, Method, Response};

pub const METHOD: Method = Method::Get;
pub const PATH: &str = "/";

pub const TITLE: &str = "Fleet Management System";

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Fleet Management System</title>
</head>
<body>
  <h1>Fleet Management System</h1>
  <ul>
    <li><code>GET /health</code></li>
    <li><code>GET /api/status</code></li>
    <li><code>GET /api/vehicles?page=&amp;limit=</code></li>
    <li><code>POST /api/vehicles</code></li>
    <li><code>POST /api/update</code></li>
    <li><code>GET /api/search?q=</code></li>
    <li><code>POST /api/batch</code></li>
  </ul>
</body>
</html>
"#;

pub fn handle<S>(ctx: &Context<S>) -> Result<Response, HandlerError> {
    let Some(raw) = ctx.query("data") else {
        return Ok(Response::html(200, PAGE));
    };

    let data: Value = serde_json::from_str(raw)
        .map_err(|_| HandlerError::Request("Invalid JSON in data parameter".into()))?;

    Ok(Response::ok(json!({ "message": TITLE, "data": data })))
}

//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method gating, the root
//! rewrite rule, and dispatch to static file serving.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Default document substituted for the exact root path
const ROOT_DOCUMENT: &str = "/index.html";

/// Request context carried through request processing
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling.
///
/// Generic over the request body: the server never reads it, and tests can
/// pass whatever body type is convenient.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let raw_path = req.uri().path();
    let is_head = *method == Method::HEAD;
    let access_log = state.config.logging.access_log;

    if access_log {
        logger::log_request(method, req.uri(), req.version());
    }

    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    let ctx = RequestContext {
        method,
        path: rewrite_root(raw_path),
        is_head,
        access_log,
    };

    Ok(static_files::serve(&ctx, &state).await)
}

/// The root rewrite rule: exactly `/` becomes the default document.
///
/// No other path is rewritten. Unknown paths resolve literally and 404;
/// there is no SPA-style wildcard fallback.
fn rewrite_root(path: &str) -> &str {
    if path == "/" {
        ROOT_DOCUMENT
    } else {
        path
    }
}

/// Gate HTTP methods: GET/HEAD proceed, OPTIONS answers 204, anything else 405
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ContentTypeConfig, LoggingConfig, ServerConfig};
    use http_body_util::BodyExt;
    use std::fs;
    use tempfile::TempDir;

    fn test_state(dir: &TempDir) -> Arc<AppState> {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                root: None,
                workers: None,
            },
            logging: LoggingConfig { access_log: false },
            content_types: ContentTypeConfig::default(),
        };
        Arc::new(AppState::with_root(config, dir.path()).unwrap())
    }

    fn request(method: Method, path: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    fn app_fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<html>A</html>").unwrap();
        fs::write(dir.path().join("app.ts"), "console.log(1)").unwrap();
        fs::write(dir.path().join("style.css"), "body{}").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_root_serves_index_html() {
        let dir = app_fixture();
        let state = test_state(&dir);

        let resp = handle_request(request(Method::GET, "/"), state).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(body_bytes(resp).await, Bytes::from("<html>A</html>"));
    }

    #[tokio::test]
    async fn test_root_and_index_html_are_equivalent() {
        let dir = app_fixture();
        let state = test_state(&dir);

        let via_root = handle_request(request(Method::GET, "/"), Arc::clone(&state))
            .await
            .unwrap();
        let direct = handle_request(request(Method::GET, "/index.html"), state)
            .await
            .unwrap();

        assert_eq!(via_root.status(), direct.status());
        assert_eq!(body_bytes(via_root).await, body_bytes(direct).await);
    }

    #[tokio::test]
    async fn test_typescript_served_as_javascript() {
        let dir = app_fixture();
        let state = test_state(&dir);

        let resp = handle_request(request(Method::GET, "/app.ts"), state)
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/javascript"
        );
        assert_eq!(body_bytes(resp).await, Bytes::from("console.log(1)"));
    }

    #[tokio::test]
    async fn test_css_uses_default_mapping() {
        let dir = app_fixture();
        let state = test_state(&dir);

        let resp = handle_request(request(Method::GET, "/style.css"), state)
            .await
            .unwrap();
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/css");
    }

    #[tokio::test]
    async fn test_only_exact_root_is_rewritten() {
        let dir = app_fixture();
        let state = test_state(&dir);

        // An unknown path must resolve literally, not fall back to index.html
        let resp = handle_request(request(Method::GET, "/missing.html"), state)
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_traversal_never_leaks_out_of_root() {
        let dir = app_fixture();
        let state = test_state(&dir);

        let resp = handle_request(request(Method::GET, "/../../etc/passwd"), state)
            .await
            .unwrap();
        assert_eq!(resp.status(), 403);
    }

    #[tokio::test]
    async fn test_head_has_headers_but_no_body() {
        let dir = app_fixture();
        let state = test_state(&dir);

        let resp = handle_request(request(Method::HEAD, "/index.html"), state)
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "14");
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_post_is_rejected() {
        let dir = app_fixture();
        let state = test_state(&dir);

        let resp = handle_request(request(Method::POST, "/index.html"), state)
            .await
            .unwrap();
        assert_eq!(resp.status(), 405);
    }

    #[tokio::test]
    async fn test_options_answers_allow() {
        let dir = app_fixture();
        let state = test_state(&dir);

        let resp = handle_request(request(Method::OPTIONS, "/"), state)
            .await
            .unwrap();
        assert_eq!(resp.status(), 204);
        assert_eq!(resp.headers().get("Allow").unwrap(), "GET, HEAD, OPTIONS");
    }
}

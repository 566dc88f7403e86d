// API module entry
// Ajax JSON endpoints and the router that dispatches to them

mod page_fields;
mod register;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use crate::ajax::AjaxRequest;
use crate::config::AppState;
use crate::error::HandlerError;
use crate::http;
use crate::logger;

// Re-export public types
pub use page_fields::PageFieldsHandler;
pub use register::RegisterHandler;
pub use response::ApiResponse;

/// A JSON endpoint mounted under a path prefix
pub trait Endpoint: Send + Sync {
    fn handle(&self, req: &AjaxRequest) -> Result<ApiResponse, HandlerError>;
}

/// Endpoint bound to its mount path
pub struct Mounted {
    pub mount: String,
    pub endpoint: Arc<dyn Endpoint>,
}

impl Mounted {
    pub fn new(mount: impl Into<String>, endpoint: Arc<dyn Endpoint>) -> Self {
        Self {
            mount: mount.into(),
            endpoint,
        }
    }

    /// Exact mount path or anything below it
    fn matches(&self, path: &str) -> bool {
        let mount = self.mount.trim_end_matches('/');
        path.strip_prefix(mount)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

/// API route handler
///
/// Checks body size, serves the health probe, then dispatches to the first
/// mounted endpoint whose prefix matches the request path.
pub async fn handle_api<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let http_config = &state.config.http;
    let path = req.uri().path();

    if let Some(resp) = http::check_body_size(req.headers(), http_config.max_body_size) {
        return Ok(resp);
    }

    if path == state.config.api.health_path {
        return Ok(http::build_health_response("ok"));
    }

    let Some(mounted) = state.endpoints.iter().find(|m| m.matches(path)) else {
        logger::log_debug(&format!("No endpoint for {path}"));
        return Ok(
            ApiResponse::error(StatusCode::NOT_FOUND, "Not Found").into_response(http_config),
        );
    };

    let ajax_req = AjaxRequest::from_http(&req, &mounted.mount, state.config.ajax.accept_json);
    let response = match mounted.endpoint.handle(&ajax_req) {
        Ok(resp) => resp,
        Err(e) => {
            logger::log_error(&format!("{} {}: {e}", ajax_req.method, ajax_req.path));
            ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    };

    Ok(response.into_response(http_config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logger::testing::RecordingLogger;
    use crate::pages::TomlPageStore;
    use http_body_util::BodyExt;

    fn state(pages_enabled: bool) -> Arc<AppState> {
        let mut config = Config::load_from("does-not-exist/config").unwrap();
        config.pages.enabled = pages_enabled;
        let store = TomlPageStore::from_toml_str(
            r#"
[[page]]
id = 1
name = "home"
path = "/"
fields = { title = "Welcome" }
"#,
        )
        .unwrap();
        Arc::new(AppState::new(
            config,
            Arc::new(RecordingLogger::default()),
            Arc::new(store),
        ))
    }

    async fn call(
        state: &Arc<AppState>,
        method: &str,
        uri: &str,
        headers: &[(&str, &str)],
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let resp = handle_api(builder.body(()).unwrap(), Arc::clone(state))
            .await
            .unwrap();
        let status = resp.status();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    const XHR: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

    struct Noop;

    impl Endpoint for Noop {
        fn handle(&self, _req: &AjaxRequest) -> Result<ApiResponse, HandlerError> {
            Ok(ApiResponse::empty(StatusCode::NO_CONTENT))
        }
    }

    #[test]
    fn test_mount_matching() {
        let m = Mounted::new("/api/register", Arc::new(Noop));
        assert!(m.matches("/api/register"));
        assert!(m.matches("/api/register/"));
        assert!(m.matches("/api/register/step/2"));
        assert!(!m.matches("/api/registered"));
        assert!(!m.matches("/api"));

        let trailing = Mounted::new("/api/pages/", Arc::new(Noop));
        assert!(trailing.matches("/api/pages"));
        assert!(trailing.matches("/api/pages/about"));
    }

    #[tokio::test]
    async fn test_register_post() {
        let state = state(false);
        let (status, body) = call(&state, "POST", "/api/register", &[XHR]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"wonderful"}"#);
    }

    #[tokio::test]
    async fn test_register_get() {
        let state = state(false);
        let (status, body) = call(&state, "GET", "/api/register", &[XHR]).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"invalid method GET"}"#);
    }

    #[tokio::test]
    async fn test_register_non_ajax() {
        let state = state(false);
        let (status, body) = call(&state, "POST", "/api/register", &[]).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"ajax requests only"}"#);
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let state = state(false);
        let (status, body) = call(&state, "POST", "/api/unknown", &[XHR]).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"Not Found"}"#);
    }

    #[tokio::test]
    async fn test_health() {
        let state = state(false);
        let (status, body) = call(&state, "GET", "/healthz", &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_body_too_large() {
        let state = state(false);
        let (status, _) = call(
            &state,
            "POST",
            "/api/register",
            &[XHR, ("Content-Length", "999999999")],
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_pages_mount_only_when_enabled() {
        let disabled = state(false);
        let (status, _) = call(&disabled, "GET", "/api/pages", &[XHR]).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let enabled = state(true);
        let (status, body) = call(&enabled, "GET", "/api/pages", &[XHR]).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["title"], "Welcome");
    }
}

//! Typed request view
//!
//! Extracts the handful of attributes ajax handlers care about from a
//! hyper request: method, ajax marker, query parameters and the URL
//! segments below the endpoint mount point.

use super::Method;
use hyper::header::{HeaderMap, ACCEPT, ORIGIN};
use hyper::Request;
use std::collections::HashMap;

/// Header set by in-page script calls
const REQUESTED_WITH: &str = "x-requested-with";

/// Read-only request attributes for one ajax call
#[derive(Debug, Clone)]
pub struct AjaxRequest {
    pub method: Method,
    pub is_ajax: bool,
    pub query: HashMap<String, String>,
    pub url_segments: Vec<String>,
    pub path: String,
    pub origin: Option<String>,
}

impl AjaxRequest {
    /// Build the view for a request routed to the endpoint mounted at `mount`
    ///
    /// `accept_json` makes `Accept: application/json` count as an ajax marker.
    pub fn from_http<B>(req: &Request<B>, mount: &str, accept_json: bool) -> Self {
        let path = req.uri().path();
        let query: HashMap<String, String> = req
            .uri()
            .query()
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();

        Self {
            method: Method::from(req.method()),
            is_ajax: is_ajax(req.headers(), accept_json),
            query,
            url_segments: url_segments(path, mount),
            path: path.to_string(),
            origin: header_str(req.headers(), ORIGIN.as_str()).map(ToString::to_string),
        }
    }

    /// Whether the request method matches `method`
    pub fn is(&self, method: &Method) -> bool {
        &self.method == method
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn is_ajax(headers: &HeaderMap, accept_json: bool) -> bool {
    let requested_with = header_str(headers, REQUESTED_WITH)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("XMLHttpRequest"));

    requested_with
        || (accept_json
            && header_str(headers, ACCEPT.as_str())
                .is_some_and(|v| v.contains("application/json")))
}

/// Non-empty path segments below `mount`
fn url_segments(path: &str, mount: &str) -> Vec<String> {
    let rest = path
        .strip_prefix(mount.trim_end_matches('/'))
        .unwrap_or(path);
    rest.split('/')
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, uri: &str) -> hyper::http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    #[test]
    fn test_xhr_header_marks_ajax() {
        let req = request("POST", "/api/register")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(())
            .unwrap();
        let view = AjaxRequest::from_http(&req, "/api/register", false);
        assert!(view.is_ajax);
        assert_eq!(view.method, Method::Post);
        assert!(view.url_segments.is_empty());
    }

    #[test]
    fn test_plain_navigation_is_not_ajax() {
        let req = request("POST", "/api/register")
            .header("Accept", "application/json")
            .body(())
            .unwrap();
        assert!(!AjaxRequest::from_http(&req, "/api/register", false).is_ajax);
        assert!(AjaxRequest::from_http(&req, "/api/register", true).is_ajax);
    }

    #[test]
    fn test_query_and_segments() {
        let req = request("GET", "/api/pages/about/team/?fields=title%2Cbody&debug=1")
            .header("Origin", "https://cms.example.com")
            .body(())
            .unwrap();
        let view = AjaxRequest::from_http(&req, "/api/pages", false);
        assert_eq!(view.url_segments, vec!["about", "team"]);
        assert_eq!(view.query.get("fields").map(String::as_str), Some("title,body"));
        assert_eq!(view.query.get("debug").map(String::as_str), Some("1"));
        assert_eq!(view.origin.as_deref(), Some("https://cms.example.com"));
        assert!(view.is(&Method::Get));
    }

    #[test]
    fn test_segments_with_trailing_slash_mount() {
        assert_eq!(url_segments("/api/pages/blog", "/api/pages/"), vec!["blog"]);
        assert!(url_segments("/api/pages", "/api/pages").is_empty());
    }
}

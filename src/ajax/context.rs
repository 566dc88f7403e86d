// Request context module
// Validates the ajax-only constraint before a handler runs

use super::AjaxRequest;
use crate::api::ApiResponse;
use crate::config::AjaxConfig;
use crate::error::HandlerError;
use hyper::StatusCode;

/// Outcome of request validation
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accept,
    /// The request is rejected; the response is sent back unchanged
    Reject(ApiResponse),
}

/// Validates inbound requests for ajax endpoints
pub trait RequestContext: Send + Sync {
    fn validate(&self, req: &AjaxRequest) -> Result<Verdict, HandlerError>;
}

/// Default ajax policy driven by `[ajax]` configuration
#[derive(Debug, Clone)]
pub struct AjaxGuard {
    ajax_only: bool,
    allowed_origins: Vec<String>,
}

impl AjaxGuard {
    pub fn new(config: &AjaxConfig) -> Self {
        Self {
            ajax_only: config.ajax_only,
            allowed_origins: config.allowed_origins.clone(),
        }
    }
}

impl RequestContext for AjaxGuard {
    fn validate(&self, req: &AjaxRequest) -> Result<Verdict, HandlerError> {
        if self.ajax_only && !req.is_ajax {
            return Ok(Verdict::Reject(ApiResponse::error(
                StatusCode::BAD_REQUEST,
                "ajax requests only",
            )));
        }

        if let Some(origin) = &req.origin {
            if !self.allowed_origins.is_empty() && !self.allowed_origins.contains(origin) {
                return Ok(Verdict::Reject(ApiResponse::error(
                    StatusCode::FORBIDDEN,
                    "origin not allowed",
                )));
            }
        }

        Ok(Verdict::Accept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ajax::Method;
    use std::collections::HashMap;

    fn guard(ajax_only: bool, origins: &[&str]) -> AjaxGuard {
        AjaxGuard::new(&AjaxConfig {
            ajax_only,
            accept_json: false,
            allowed_origins: origins.iter().map(ToString::to_string).collect(),
        })
    }

    fn req(is_ajax: bool, origin: Option<&str>) -> AjaxRequest {
        AjaxRequest {
            method: Method::Post,
            is_ajax,
            query: HashMap::new(),
            url_segments: Vec::new(),
            path: "/api/register".to_string(),
            origin: origin.map(ToString::to_string),
        }
    }

    #[test]
    fn test_accepts_ajax_request() {
        let verdict = guard(true, &[]).validate(&req(true, None)).unwrap();
        assert_eq!(verdict, Verdict::Accept);
    }

    #[test]
    fn test_rejects_non_ajax_request() {
        let verdict = guard(true, &[]).validate(&req(false, None)).unwrap();
        match verdict {
            Verdict::Reject(resp) => {
                assert_eq!(resp.status, StatusCode::BAD_REQUEST);
                assert_eq!(resp.body_json(), r#"{"error":"ajax requests only"}"#);
            }
            Verdict::Accept => panic!("non-ajax request accepted"),
        }
    }

    #[test]
    fn test_ajax_only_disabled() {
        let verdict = guard(false, &[]).validate(&req(false, None)).unwrap();
        assert_eq!(verdict, Verdict::Accept);
    }

    #[test]
    fn test_origin_allow_list() {
        let g = guard(true, &["https://cms.example.com"]);

        let ok = g.validate(&req(true, Some("https://cms.example.com"))).unwrap();
        assert_eq!(ok, Verdict::Accept);

        // Same-origin requests often carry no Origin header
        let no_origin = g.validate(&req(true, None)).unwrap();
        assert_eq!(no_origin, Verdict::Accept);

        match g.validate(&req(true, Some("https://evil.test"))).unwrap() {
            Verdict::Reject(resp) => assert_eq!(resp.status, StatusCode::FORBIDDEN),
            Verdict::Accept => panic!("foreign origin accepted"),
        }
    }
}

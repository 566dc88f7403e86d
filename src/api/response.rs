// API response module
// Typed JSON response and its conversion into a hyper response

use crate::config::HttpConfig;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};

/// Typed response body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// `{"status": "..."}`
    Status { status: String },
    /// `{"error": "..."}`
    Error { error: String },
    /// Arbitrary field data
    Fields(Map<String, Value>),
    /// No body at all
    Empty,
}

/// Status code plus typed body produced by an endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Status {
                status: message.into(),
            },
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Error {
                error: message.into(),
            },
        }
    }

    pub const fn fields(data: Map<String, Value>) -> Self {
        Self {
            status: StatusCode::OK,
            body: ResponseBody::Fields(data),
        }
    }

    pub const fn empty(status: StatusCode) -> Self {
        Self {
            status,
            body: ResponseBody::Empty,
        }
    }

    /// Serialized body; empty string for [`ResponseBody::Empty`]
    pub fn body_json(&self) -> String {
        if self.body == ResponseBody::Empty {
            return String::new();
        }
        serde_json::to_string(&self.body).unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            r#"{"error":"Internal server error"}"#.to_string()
        })
    }

    /// Convert into a hyper response carrying the configured common headers
    pub fn into_response(self, http: &HttpConfig) -> Response<Full<Bytes>> {
        let body = self.body_json();
        let mut builder = Response::builder()
            .status(self.status)
            .header("Server", http.server_name.as_str());

        if self.body != ResponseBody::Empty {
            builder = builder.header("Content-Type", "application/json");
        }
        if http.enable_cors {
            builder = builder.header("Access-Control-Allow-Origin", "*");
        }

        builder
            .body(Full::new(Bytes::from(body)))
            .unwrap_or_else(|e| {
                logger::log_error(&format!("Failed to build response: {e}"));
                Response::new(Full::new(Bytes::from("Error")))
            })
    }
}

// Request method enum
// Fixed set of HTTP methods with an escape hatch for extension methods

use std::fmt;

/// HTTP request method as seen by ajax handlers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    /// Any other method token, kept verbatim
    Other(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Other(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&hyper::Method> for Method {
    fn from(method: &hyper::Method) -> Self {
        match method {
            &hyper::Method::GET => Self::Get,
            &hyper::Method::POST => Self::Post,
            &hyper::Method::PUT => Self::Put,
            &hyper::Method::DELETE => Self::Delete,
            &hyper::Method::PATCH => Self::Patch,
            &hyper::Method::HEAD => Self::Head,
            &hyper::Method::OPTIONS => Self::Options,
            other => Self::Other(other.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hyper_method() {
        assert_eq!(Method::from(&hyper::Method::POST), Method::Post);
        assert_eq!(Method::from(&hyper::Method::GET), Method::Get);
        assert_eq!(Method::from(&hyper::Method::DELETE), Method::Delete);

        let propfind = hyper::Method::from_bytes(b"PROPFIND").unwrap();
        assert_eq!(
            Method::from(&propfind),
            Method::Other("PROPFIND".to_string())
        );
    }

    #[test]
    fn test_display_is_wire_token() {
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Other("PURGE".to_string()).to_string(), "PURGE");
    }
}

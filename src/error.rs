// Handler error module
// Failures raised by request collaborators (logger, request context, page store)

use std::fmt;

/// Error propagated out of a request handler
///
/// Handlers never catch these; the transport layer turns them into a 500.
#[derive(Debug)]
pub enum HandlerError {
    /// The diagnostic logger could not write its entry
    Log(std::io::Error),
    /// The request context failed while validating
    Context(String),
    /// The page store failed while looking up a page
    Store(String),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Log(e) => write!(f, "log write failed: {e}"),
            Self::Context(msg) => write!(f, "request context failed: {msg}"),
            Self::Store(msg) => write!(f, "page store failed: {msg}"),
        }
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Log(e) => Some(e),
            Self::Context(_) | Self::Store(_) => None,
        }
    }
}

impl From<std::io::Error> for HandlerError {
    fn from(e: std::io::Error) -> Self {
        Self::Log(e)
    }
}

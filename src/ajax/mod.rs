//! Ajax request layer
//!
//! Typed request view, method enum, and the validation context that
//! enforces the ajax-only policy for JSON endpoints.

mod context;
mod method;
mod request;

pub use context::{AjaxGuard, RequestContext, Verdict};
pub use method::Method;
pub use request::AjaxRequest;

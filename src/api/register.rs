// Register endpoint handler
// Accepts ajax POST calls and answers with a fixed success body

use std::sync::Arc;

use hyper::StatusCode;

use super::{ApiResponse, Endpoint};
use crate::ajax::{AjaxRequest, Method, RequestContext, Verdict};
use crate::error::HandlerError;
use crate::logger::Logger;

/// Handler for the register endpoint
pub struct RegisterHandler {
    logger: Arc<dyn Logger>,
    context: Arc<dyn RequestContext>,
}

impl RegisterHandler {
    pub fn new(logger: Arc<dyn Logger>, context: Arc<dyn RequestContext>) -> Self {
        Self { logger, context }
    }
}

impl Endpoint for RegisterHandler {
    fn handle(&self, req: &AjaxRequest) -> Result<ApiResponse, HandlerError> {
        self.logger
            .save("ajax", &format!("seeing a {}", req.method))?;

        if let Verdict::Reject(response) = self.context.validate(req)? {
            return Ok(response);
        }

        if !req.is(&Method::Post) {
            return Ok(ApiResponse::error(
                StatusCode::BAD_REQUEST,
                format!("invalid method {}", req.method),
            ));
        }

        Ok(ApiResponse::status(StatusCode::OK, "wonderful"))
    }
}

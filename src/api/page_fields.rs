// Page fields endpoint handler
// Resolves URL segments to a CMS page and returns its field data (opt-in)

use std::sync::Arc;

use hyper::StatusCode;

use super::{ApiResponse, Endpoint};
use crate::ajax::{AjaxRequest, Method, RequestContext, Verdict};
use crate::error::HandlerError;
use crate::logger::Logger;
use crate::pages::PageStore;

/// Handler for `GET <mount>/<segments...>`
pub struct PageFieldsHandler {
    logger: Arc<dyn Logger>,
    context: Arc<dyn RequestContext>,
    store: Arc<dyn PageStore>,
    /// Honor the `?debug` short-circuit
    debug: bool,
}

impl PageFieldsHandler {
    pub fn new(
        logger: Arc<dyn Logger>,
        context: Arc<dyn RequestContext>,
        store: Arc<dyn PageStore>,
        debug: bool,
    ) -> Self {
        Self {
            logger,
            context,
            store,
            debug,
        }
    }
}

impl Endpoint for PageFieldsHandler {
    fn handle(&self, req: &AjaxRequest) -> Result<ApiResponse, HandlerError> {
        self.logger
            .save("ajax", &format!("seeing a {}", req.method))?;

        if let Verdict::Reject(response) = self.context.validate(req)? {
            return Ok(response);
        }

        if !req.is(&Method::Get) {
            return Ok(ApiResponse::error(
                StatusCode::BAD_REQUEST,
                "Invalid request method",
            ));
        }

        let path = format!("/{}", req.url_segments.join("/"));
        let Some(page) = self.store.get(&path)? else {
            return Ok(ApiResponse::error(StatusCode::NOT_FOUND, "Page not found"));
        };

        if self.debug && req.query.contains_key("debug") {
            return Ok(ApiResponse::empty(StatusCode::OK));
        }

        let wanted: Option<Vec<&str>> = req.query.get("fields").map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect()
        });

        Ok(ApiResponse::fields(page.field_data(wanted.as_deref())))
    }
}

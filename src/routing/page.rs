// Page route handlers
// Map a route to one file on disk; the host streams the file after the handler runs

use std::path::PathBuf;

use super::{HandlerFactory, HttpContext, RequestHandler, RouteValues};

pub struct PageRouteHandler {
    file: PathBuf,
}

impl PageRouteHandler {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }
}

impl HandlerFactory for PageRouteHandler {
    fn create(&self, _values: &RouteValues) -> Box<dyn RequestHandler> {
        Box::new(StaticPageHandler {
            file: self.file.clone(),
        })
    }
}

#[derive(Debug)]
pub struct StaticPageHandler {
    file: PathBuf,
}

impl RequestHandler for StaticPageHandler {
    fn process(&self, ctx: &mut HttpContext) {
        ctx.response.transmit_file(self.file.clone());
    }
}

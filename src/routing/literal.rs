// Literal URL route
// Matches one URL written without a leading slash, e.g. "forms/html/Sample"

use std::sync::Arc;

use super::{HandlerFactory, RouteData, RouteMatcher};
use crate::http::QueryParams;

pub struct LiteralRoute {
    name: String,
    url: String,
    factory: Arc<dyn HandlerFactory>,
}

impl LiteralRoute {
    pub fn new(name: impl Into<String>, url: &str, factory: Arc<dyn HandlerFactory>) -> Self {
        Self {
            name: name.into(),
            url: url.trim_matches('/').to_string(),
            factory,
        }
    }
}

impl RouteMatcher for LiteralRoute {
    fn name(&self) -> &str {
        &self.name
    }

    /// Leading and trailing slashes are ignored, letters compare case-insensitively
    fn try_match(&self, path: &str, _query: &QueryParams) -> Option<RouteData> {
        path.trim_matches('/')
            .eq_ignore_ascii_case(&self.url)
            .then(|| RouteData::new(Arc::clone(&self.factory)))
    }
}

//! Routing module
//!
//! Requests are dispatched through an ordered [`RouteTable`]:
//! - each [`RouteMatcher`] either claims a request with a [`RouteData`] or declines
//! - the first claim wins, declines fall through to the next route
//! - the claiming route's [`HandlerFactory`] builds a fresh [`RequestHandler`]
//!   which writes the response into an [`HttpContext`]

mod context;
mod literal;
mod page;
mod print_id;
mod table;

use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{MessageControllerFactory, Services};
use crate::config::Config;
use crate::http::QueryParams;
use crate::logger;

pub use context::{HttpContext, HttpRequest, HttpResponse};
pub use literal::LiteralRoute;
pub use page::{PageRouteHandler, StaticPageHandler};
pub use print_id::{parse_id_or_default, PrintIdHandler, PrintIdHandlerFactory, PrintIdRoute};
pub use table::{ResolvedRoute, RouteTable};

/// Decides whether a request belongs to a route
pub trait RouteMatcher: Send + Sync {
    /// Name used in logs and access log entries
    fn name(&self) -> &str;

    /// `None` means "not mine", never an error
    fn try_match(&self, path: &str, query: &QueryParams) -> Option<RouteData>;
}

/// Turns the values extracted by a route into a handler for one request
pub trait HandlerFactory: Send + Sync {
    fn create(&self, values: &RouteValues) -> Box<dyn RequestHandler>;
}

/// Processes exactly one request
pub trait RequestHandler: Send {
    fn process(&self, ctx: &mut HttpContext);

    /// Whether the host may keep this instance for later requests
    fn is_reusable(&self) -> bool {
        false
    }
}

/// Raw values extracted at match time; `None` records an absent parameter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteValues {
    values: HashMap<String, Option<String>>,
}

impl RouteValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.values.insert(key.into(), value);
    }

    /// Absent keys and recorded `None` values both read as `None`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Option::as_deref)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

/// Routing decision for one request
pub struct RouteData {
    pub values: RouteValues,
    pub route_handler: Arc<dyn HandlerFactory>,
}

impl RouteData {
    pub fn new(route_handler: Arc<dyn HandlerFactory>) -> Self {
        Self {
            values: RouteValues::new(),
            route_handler,
        }
    }

    /// Build the handler for this request
    pub fn create_handler(&self) -> Box<dyn RequestHandler> {
        self.route_handler.create(&self.values)
    }
}

impl std::fmt::Debug for RouteData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteData")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

/// Register every route at startup
///
/// The custom `/show-id` route goes in first so it gets first refusal on every
/// request; page routes and API routes follow in configuration order.
pub fn register_routes(table: &mut RouteTable, config: &Config, services: &Services) {
    let routes = &config.routes;

    for page in &routes.pages {
        table.add(LiteralRoute::new(
            format!("page:{}", page.url),
            &page.url,
            Arc::new(PageRouteHandler::new(&page.file)),
        ));
    }

    if config.api.enabled {
        table.add(LiteralRoute::new(
            format!("api:{}", config.api.message_path),
            &config.api.message_path,
            Arc::new(MessageControllerFactory::new(Arc::clone(
                &services.message_service,
            ))),
        ));
    }

    if routes.show_id.enabled {
        table.insert_first(PrintIdRoute::new(&routes.show_id.path, &routes.show_id.param));
    }

    for (index, name) in table.names().enumerate() {
        logger::log_route_registered(index, name);
    }
}

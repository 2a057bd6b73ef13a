// Ordered route table
// Routes are consulted top to bottom; the first one that claims a request wins

use super::{RouteData, RouteMatcher};
use crate::http::QueryParams;

/// Result of a successful resolution
#[derive(Debug)]
pub struct ResolvedRoute<'a> {
    pub name: &'a str,
    pub data: RouteData,
}

#[derive(Default)]
pub struct RouteTable {
    routes: Vec<Box<dyn RouteMatcher>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route after all registered routes
    pub fn add(&mut self, route: impl RouteMatcher + 'static) {
        self.routes.push(Box::new(route));
    }

    /// Place a route ahead of all registered routes
    pub fn insert_first(&mut self, route: impl RouteMatcher + 'static) {
        self.routes.insert(0, Box::new(route));
    }

    /// First route that claims the request, `None` when every route declines
    pub fn resolve(&self, path: &str, query: &QueryParams) -> Option<ResolvedRoute<'_>> {
        self.routes.iter().find_map(|route| {
            route.try_match(path, query).map(|data| ResolvedRoute {
                name: route.name(),
                data,
            })
        })
    }

    /// Route names in resolution order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

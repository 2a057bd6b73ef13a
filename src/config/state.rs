// Application state module
// Holds the loaded configuration and the route table built from it

use crate::api::Services;
use crate::routing::{self, RouteTable};

use super::types::Config;

/// Application state shared by every connection
pub struct AppState {
    pub config: Config,
    /// Immutable after startup; resolved concurrently by request tasks
    pub route_table: RouteTable,
    // Cached config values for fast access
    pub access_log: bool,
}

impl AppState {
    /// Build the state and register all routes
    ///
    /// `services` are the dependencies handed to controllers, constructed by the caller.
    pub fn new(config: Config, services: &Services) -> Self {
        let mut route_table = RouteTable::new();
        routing::register_routes(&mut route_table, &config, services);

        let access_log = config.logging.access_log;

        Self {
            config,
            route_table,
            access_log,
        }
    }
}

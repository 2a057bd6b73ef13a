// API module entry
// Controllers receive their services through constructors; `Services` is built once at startup

mod controller;
mod response;

use std::sync::Arc;

use crate::config::Config;

pub use controller::{MessageController, MessageControllerFactory};
pub use response::write_json;

/// Produces the text served by `GET api/message`
pub trait MessageService: Send + Sync {
    fn message(&self) -> String;
}

/// Message service backed by the `api.message` setting
#[derive(Debug, Clone)]
pub struct ConfiguredMessageService {
    text: String,
}

impl ConfiguredMessageService {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl MessageService for ConfiguredMessageService {
    fn message(&self) -> String {
        self.text.clone()
    }
}

/// Service instances handed to controllers
#[derive(Clone)]
pub struct Services {
    pub message_service: Arc<dyn MessageService>,
}

impl Services {
    pub fn from_config(config: &Config) -> Self {
        Self {
            message_service: Arc::new(ConfiguredMessageService::new(&config.api.message)),
        }
    }
}

// Message controller

use hyper::StatusCode;
use std::sync::Arc;

use super::response::write_json;
use super::MessageService;
use crate::routing::{HandlerFactory, HttpContext, RequestHandler, RouteValues};

/// Builds a controller per request around the injected service
pub struct MessageControllerFactory {
    service: Arc<dyn MessageService>,
}

impl MessageControllerFactory {
    pub fn new(service: Arc<dyn MessageService>) -> Self {
        Self { service }
    }
}

impl HandlerFactory for MessageControllerFactory {
    fn create(&self, _values: &RouteValues) -> Box<dyn RequestHandler> {
        Box::new(MessageController::new(Arc::clone(&self.service)))
    }
}

pub struct MessageController {
    message_service: Arc<dyn MessageService>,
}

impl MessageController {
    pub fn new(message_service: Arc<dyn MessageService>) -> Self {
        Self { message_service }
    }
}

impl RequestHandler for MessageController {
    fn process(&self, ctx: &mut HttpContext) {
        let message = self.message_service.message();
        write_json(&mut ctx.response, StatusCode::OK, &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ConfiguredMessageService;
    use crate::http::QueryParams;
    use crate::routing::HttpRequest;
    use hyper::Method;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls so the test can see the injected instance being used
    struct CountingService {
        calls: AtomicUsize,
    }

    impl MessageService for CountingService {
        fn message(&self) -> String {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            format!("call {n}")
        }
    }

    fn context() -> HttpContext {
        HttpContext::new(HttpRequest {
            method: Method::GET,
            path: "/api/message".to_string(),
            query: QueryParams::default(),
        })
    }

    #[test]
    fn test_controller_uses_injected_service() {
        let service = Arc::new(CountingService {
            calls: AtomicUsize::new(0),
        });
        let factory = MessageControllerFactory::new(service.clone());

        for expected in ["\"call 1\"", "\"call 2\""] {
            let mut ctx = context();
            factory.create(&RouteValues::new()).process(&mut ctx);
            assert_eq!(ctx.response.status(), Some(StatusCode::OK));
            assert_eq!(ctx.response.body(), expected.as_bytes());
        }
        assert_eq!(service.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_configured_service_message() {
        let controller =
            MessageController::new(Arc::new(ConfiguredMessageService::new("Hello")));
        let mut ctx = context();
        controller.process(&mut ctx);
        assert_eq!(ctx.response.body(), b"\"Hello\"");
        assert!(!controller.is_reusable());
    }
}

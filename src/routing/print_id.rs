//! `/show-id` route
//!
//! Bypasses every other route: the request path is compared to a fixed pattern,
//! the raw `id` query value is handed to [`PrintIdHandlerFactory`], and
//! [`PrintIdHandler`] writes `Recieved Id:<id>`.

use std::sync::Arc;

use super::{HandlerFactory, HttpContext, RequestHandler, RouteData, RouteMatcher, RouteValues};
use crate::http::QueryParams;

/// Route value key under which the raw parameter is stored
const ID_KEY: &str = "id";

/// Matches one fixed path, ignoring case
pub struct PrintIdRoute {
    pattern: String,
    param: String,
    factory: Arc<PrintIdHandlerFactory>,
}

impl PrintIdRoute {
    /// `pattern` is lowercased here so matching only lowercases the request path
    pub fn new(pattern: &str, param: &str) -> Self {
        Self {
            pattern: pattern.to_lowercase(),
            param: param.to_string(),
            factory: Arc::new(PrintIdHandlerFactory),
        }
    }
}

impl Default for PrintIdRoute {
    fn default() -> Self {
        Self::new("/show-id", "id")
    }
}

impl RouteMatcher for PrintIdRoute {
    fn name(&self) -> &str {
        "print-id"
    }

    fn try_match(&self, path: &str, query: &QueryParams) -> Option<RouteData> {
        if path.to_lowercase() != self.pattern {
            return None;
        }

        let mut data = RouteData::new(Arc::clone(&self.factory) as Arc<dyn HandlerFactory>);
        data.values
            .insert(ID_KEY, query.get(&self.param).map(ToString::to_string));
        Some(data)
    }
}

/// Coerce a raw parameter to an integer, `0` when absent or unparseable
///
/// Surrounding ASCII whitespace (space, `\t` through `\r`) is ignored and an
/// optional sign is accepted. Other whitespace such as NBSP is not trimmed,
/// and values outside the `i32` range also yield `0`.
pub fn parse_id_or_default(raw: Option<&str>) -> i32 {
    raw.and_then(|s| s.trim_matches(is_id_whitespace).parse().ok()).unwrap_or(0)
}

const fn is_id_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Stateless: every call returns an independent handler
#[derive(Debug, Default)]
pub struct PrintIdHandlerFactory;

impl HandlerFactory for PrintIdHandlerFactory {
    fn create(&self, values: &RouteValues) -> Box<dyn RequestHandler> {
        Box::new(PrintIdHandler::new(parse_id_or_default(values.get(ID_KEY))))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintIdHandler {
    id: i32,
}

impl PrintIdHandler {
    pub const fn new(id: i32) -> Self {
        Self { id }
    }

    pub const fn id(&self) -> i32 {
        self.id
    }
}

impl RequestHandler for PrintIdHandler {
    // "Recieved" is observable output, keep the spelling
    fn process(&self, ctx: &mut HttpContext) {
        ctx.response.write(&format!("Recieved Id:{}", self.id));
    }

    fn is_reusable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::HttpRequest;
    use hyper::Method;

    fn query(raw: &str) -> QueryParams {
        QueryParams::parse(Some(raw))
    }

    fn run(data: &RouteData) -> String {
        let handler = data.create_handler();
        let mut ctx = HttpContext::new(HttpRequest {
            method: Method::GET,
            path: "/show-id".to_string(),
            query: QueryParams::default(),
        });
        handler.process(&mut ctx);
        String::from_utf8(ctx.response.into_body()).unwrap()
    }

    #[test]
    fn test_declines_other_paths() {
        let route = PrintIdRoute::default();
        for path in ["/", "/other-path", "/show-id/", "/show-ids", "/show", "show-id", "/api/show-id"] {
            assert!(route.try_match(path, &query("id=7")).is_none(), "{path}");
        }
    }

    #[test]
    fn test_matches_any_casing() {
        let route = PrintIdRoute::default();
        for path in ["/show-id", "/SHOW-ID", "/Show-Id", "/sHoW-iD"] {
            assert!(route.try_match(path, &QueryParams::default()).is_some(), "{path}");
        }
    }

    #[test]
    fn test_extracts_raw_value() {
        let route = PrintIdRoute::default();

        let data = route.try_match("/show-id", &query("id=abc&x=1")).unwrap();
        assert_eq!(data.values.get("id"), Some("abc"));

        let data = route.try_match("/show-id", &QueryParams::default()).unwrap();
        assert!(data.values.contains_key("id"));
        assert_eq!(data.values.get("id"), None);
    }

    #[test]
    fn test_configured_pattern_is_case_insensitive() {
        let route = PrintIdRoute::new("/Print-ID", "value");
        let data = route.try_match("/print-id", &query("value=9")).unwrap();
        assert_eq!(run(&data), "Recieved Id:9");
    }

    #[test]
    fn test_parse_id_or_default() {
        assert_eq!(parse_id_or_default(Some("42")), 42);
        assert_eq!(parse_id_or_default(Some("-5")), -5);
        assert_eq!(parse_id_or_default(Some("+8")), 8);
        assert_eq!(parse_id_or_default(Some(" 12 ")), 12);
        assert_eq!(parse_id_or_default(Some("\t12\x0B\r\n")), 12);
        assert_eq!(parse_id_or_default(Some("\u{a0}12")), 0);
        assert_eq!(parse_id_or_default(Some("12\u{2003}")), 0);
        assert_eq!(parse_id_or_default(Some("007")), 7);
        assert_eq!(parse_id_or_default(Some("2147483647")), i32::MAX);
        assert_eq!(parse_id_or_default(Some("2147483648")), 0);
        assert_eq!(parse_id_or_default(Some("abc")), 0);
        assert_eq!(parse_id_or_default(Some("1.5")), 0);
        assert_eq!(parse_id_or_default(Some("1,2")), 0);
        assert_eq!(parse_id_or_default(Some("")), 0);
        assert_eq!(parse_id_or_default(None), 0);
    }

    #[test]
    fn test_handler_output() {
        let route = PrintIdRoute::default();
        let cases = [
            ("id=42", "Recieved Id:42"),
            ("id=007", "Recieved Id:7"),
            ("id=-3", "Recieved Id:-3"),
            ("id=1000000", "Recieved Id:1000000"),
            ("id=", "Recieved Id:0"),
            ("id=abc", "Recieved Id:0"),
            ("other=1", "Recieved Id:0"),
        ];
        for (raw, expected) in cases {
            let data = route.try_match("/show-id", &query(raw)).unwrap();
            assert_eq!(run(&data), expected, "{raw}");
        }
    }

    #[test]
    fn test_handler_never_reusable_and_sets_no_headers() {
        for raw in [None, Some("1"), Some("x")] {
            let mut values = RouteValues::new();
            values.insert("id", raw.map(ToString::to_string));
            let handler = PrintIdHandlerFactory.create(&values);
            assert!(!handler.is_reusable());

            let mut ctx = HttpContext::new(HttpRequest {
                method: Method::GET,
                path: "/show-id".to_string(),
                query: QueryParams::default(),
            });
            handler.process(&mut ctx);
            assert_eq!(ctx.response.status(), None);
            assert_eq!(ctx.response.content_type(), None);
        }
    }
}

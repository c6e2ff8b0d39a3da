//! Matchit routing configuration.

use std::sync::Arc;

use hyper::{body::Bytes, Request, Response};
use matchit::Router as MatchitRouter;

use crate::handlers;
use dlc_mock_core::GenConfig;

/// Shared application state.
///
/// Holds only immutable configuration; every request builds its own
/// generator, so concurrent requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Generator configuration applied to every request
    pub gen_config: Arc<GenConfig>,
    /// Seed forced onto every request when set (deterministic server mode)
    pub default_seed: Option<u64>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with the mock API routes.
    pub fn new(gen_config: Arc<GenConfig>, default_seed: Option<u64>) -> Self {
        let mut router = MatchitRouter::new();

        router
            .insert("/health", RouteHandler::Health)
            .expect("Failed to insert /health route");
        router
            .insert("/stats", RouteHandler::Stats)
            .expect("Failed to insert /stats route");
        router
            .insert("/dataset", RouteHandler::Dataset)
            .expect("Failed to insert /dataset route");
        router
            .insert("/dataset/map", RouteHandler::MapView)
            .expect("Failed to insert /dataset/map route");
        router
            .insert("/dataset/states", RouteHandler::StateView)
            .expect("Failed to insert /dataset/states route");
        router
            .insert("/dataset/age-distribution", RouteHandler::AgeView)
            .expect("Failed to insert /dataset/age-distribution route");

        Self {
            inner: router,
            state: AppState {
                gen_config,
                default_seed,
            },
        }
    }

    /// Routes an incoming request to the appropriate handler.
    pub fn route(&self, req: Request<hyper::body::Incoming>) -> Result<Response<Bytes>, RouterError> {
        let path = req.uri().path().to_string();

        match self.inner.at(&path) {
            Ok(matched) => matched.value.handle(req, self.state.clone()),
            Err(_) => {
                let error_response = handlers::error_response(
                    404,
                    "Not Found".to_string(),
                    Some(format!("No route found for {}", path)),
                );
                let body = serde_json::to_vec(&error_response).map_err(|e| {
                    RouterError::InternalError(format!("Failed to serialize error response: {}", e))
                })?;
                Response::builder()
                    .status(404)
                    .header("Content-Type", "application/json")
                    .body(Bytes::from(body))
                    .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
            }
        }
    }
}

/// Route handler selector.
enum RouteHandler {
    Health,
    Stats,
    Dataset,
    MapView,
    StateView,
    AgeView,
}

impl RouteHandler {
    fn handle(
        &self,
        req: Request<hyper::body::Incoming>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError> {
        if req.method() != hyper::Method::GET {
            return Err(RouterError::MethodNotAllowed);
        }
        match self {
            RouteHandler::Health => handlers::health(req, state),
            RouteHandler::Stats => handlers::stats(req, state),
            RouteHandler::Dataset => handlers::dataset(req, state),
            RouteHandler::MapView => handlers::map_view(req, state),
            RouteHandler::StateView => handlers::state_view(req, state),
            RouteHandler::AgeView => handlers::age_view(req, state),
        }
    }
}

/// Router error type.
#[derive(Debug)]
pub enum RouterError {
    MethodNotAllowed,
    BadRequest(String),
    NotFound(String),
    InternalError(String),
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            RouterError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            RouterError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            RouterError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for RouterError {}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let (status, message) = match &err {
            RouterError::MethodNotAllowed => (405, "Method Not Allowed"),
            RouterError::BadRequest(msg) => (400, msg.as_str()),
            RouterError::NotFound(msg) => (404, msg.as_str()),
            RouterError::InternalError(msg) => (500, msg.as_str()),
        };

        let error_response = handlers::error_response(status, message.to_string(), None);
        let body = serde_json::to_vec(&error_response).unwrap_or_else(|e| {
            format!(
                "{{\"success\":false,\"error\":{{\"code\":\"500\",\"message\":\"Failed to serialize error: {}\",\"details\":null}}}}",
                e
            )
            .into_bytes()
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(500)
                    .body(Bytes::from("Internal Server Error"))
                    .expect("Failed to build fallback error response")
            })
    }
}

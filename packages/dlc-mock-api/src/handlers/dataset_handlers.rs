//! Dataset and statistics endpoint handlers.
//!
//! Every endpoint runs an independent generation pass; nothing is cached,
//! so two unseeded requests return different data by design.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};
use dlc_mock_core::model::GeneratedDataset;
use dlc_mock_core::{summary, GenConfig, Generator};

use super::request_utils::{build_response, parse_query_options, QueryOptions};
use super::response::serialize_success;

/// Builds a generator and runs one pass.
///
/// Seed precedence: query parameter, then the server's fixed seed, then
/// fresh entropy.
fn generate(
    options: &QueryOptions,
    state: &AppState,
) -> Result<GeneratedDataset, RouterError> {
    let config: GenConfig = (*state.gen_config).clone();
    let mut generator = match options.seed.or(state.default_seed) {
        Some(seed) => Generator::from_seed(seed, config),
        None => Generator::new(config),
    }
    .map_err(|e| RouterError::InternalError(format!("Generator setup failed: {}", e)))?;

    generator
        .generate()
        .map_err(|e| RouterError::InternalError(format!("Generation failed: {}", e)))
}

/// Liveness probe.
///
/// # Endpoint
/// `GET /health`
///
/// # Response
/// - **200 OK**: `{"success":true,"data":{"status":"ok"}}`
pub fn health(
    _req: Request<hyper::body::Incoming>,
    _state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let json = serialize_success(serde_json::json!({ "status": "ok" }), false)?;
    build_response(200, json)
}

/// Headline statistics for the dashboard cards.
///
/// # Endpoint
/// `GET /stats`
///
/// # Query Parameters
/// - `seed`: pin the generator for a deterministic response
///
/// # Response
/// - **200 OK**: totals, verified/pending counts, online/offline split,
///   success rate, and the generation timestamp
///
/// # Example
/// ```bash
/// curl "http://localhost:8080/stats?seed=42"
/// ```
pub fn stats(
    req: Request<hyper::body::Incoming>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let options = parse_query_options(req.uri().query())?;
    let dataset = generate(&options, &state)?;
    let json = serialize_success(summary::stats(&dataset), options.pretty)?;
    build_response(200, json)
}

/// Full hierarchical dataset.
///
/// # Endpoint
/// `GET /dataset`
///
/// # Query Parameters
/// - `seed`: pin the generator for a deterministic response
/// - `pretty`: pretty-print the JSON body
///
/// # Response
/// - **200 OK**: the complete state → district → location → bank tree
///
/// # Example
/// ```bash
/// curl "http://localhost:8080/dataset?seed=42&pretty=true"
/// ```
pub fn dataset(
    req: Request<hyper::body::Incoming>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let options = parse_query_options(req.uri().query())?;
    let dataset = generate(&options, &state)?;
    let json = serialize_success(&dataset, options.pretty)?;
    build_response(200, json)
}

/// Flattened per-bank rows for map rendering.
///
/// # Endpoint
/// `GET /dataset/map`
///
/// # Query Parameters
/// - `seed`: pin the generator for a deterministic response
/// - `state`: restrict output to one state (case-insensitive)
///
/// # Errors
/// - **404 Not Found**: `state` filter matches no state in the dataset
///
/// # Example
/// ```bash
/// curl "http://localhost:8080/dataset/map?state=Uttar%20Pradesh"
/// ```
pub fn map_view(
    req: Request<hyper::body::Incoming>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let options = parse_query_options(req.uri().query())?;
    let dataset = generate(&options, &state)?;
    let mut points = summary::map_points(&dataset);

    if let Some(filter) = &options.state {
        let filter_lower = filter.to_lowercase();
        points.retain(|p| p.state.to_lowercase() == filter_lower);
        if points.is_empty() {
            return Err(RouterError::NotFound(format!(
                "No data for state '{}'",
                filter
            )));
        }
    }

    let json = serialize_success(points, options.pretty)?;
    build_response(200, json)
}

/// Age-wise population counts for the distribution chart.
///
/// # Endpoint
/// `GET /dataset/age-distribution`
///
/// # Query Parameters
/// - `seed`: pin the generator for a deterministic response
///
/// # Response
/// - **200 OK**: one row per catalog age group, in catalog order
///
/// # Example
/// ```bash
/// curl "http://localhost:8080/dataset/age-distribution?seed=42"
/// ```
pub fn age_view(
    req: Request<hyper::body::Incoming>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let options = parse_query_options(req.uri().query())?;
    let dataset = generate(&options, &state)?;
    let json = serialize_success(summary::age_distribution(&dataset), options.pretty)?;
    build_response(200, json)
}

/// Per-state rollups for the state-wise table.
///
/// # Endpoint
/// `GET /dataset/states`
///
/// # Query Parameters
/// - `seed`: pin the generator for a deterministic response
///
/// # Example
/// ```bash
/// curl http://localhost:8080/dataset/states
/// ```
pub fn state_view(
    req: Request<hyper::body::Incoming>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let options = parse_query_options(req.uri().query())?;
    let dataset = generate(&options, &state)?;
    let json = serialize_success(summary::state_summaries(&dataset), options.pretty)?;
    build_response(200, json)
}

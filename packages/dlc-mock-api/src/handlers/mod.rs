//! HTTP endpoint implementations for the mock data API.

mod dataset_handlers;
mod request_utils;
mod response;

pub use dataset_handlers::{age_view, dataset, health, map_view, state_view, stats};
pub use response::{
    error_response, serialize_success, success_response, ApiError, ApiResponse, ErrorResponse,
};

//! Shared request parsing and response building helpers.

use hyper::{body::Bytes, Response};
use percent_encoding::percent_decode_str;

use crate::router::RouterError;

/// Query options common to the dataset endpoints.
#[derive(Debug, Default, PartialEq)]
pub struct QueryOptions {
    /// Pin the generator to this seed for a deterministic response
    pub seed: Option<u64>,
    /// Pretty-print the JSON body
    pub pretty: bool,
    /// Restrict map output to one state (exact, case-insensitive)
    pub state: Option<String>,
}

/// Parses `seed`, `pretty`, and `state` from a URL query string.
///
/// Unknown keys are ignored so dashboards can pass cache-busting params.
pub fn parse_query_options(query_str: Option<&str>) -> Result<QueryOptions, RouterError> {
    let mut options = QueryOptions::default();

    if let Some(query_str) = query_str {
        for pair in query_str.split('&') {
            let parts: Vec<&str> = pair.split('=').collect();
            if parts.len() != 2 {
                continue;
            }
            let key = parts[0];
            let decoded_value = percent_decode_str(parts[1]).decode_utf8_lossy();

            match key {
                "seed" => {
                    options.seed = Some(decoded_value.parse().map_err(|e| {
                        RouterError::BadRequest(format!(
                            "Invalid seed value '{}': {}",
                            decoded_value, e
                        ))
                    })?);
                }
                "pretty" => {
                    options.pretty = decoded_value.parse().map_err(|e| {
                        RouterError::BadRequest(format!(
                            "Invalid pretty value '{}': {}",
                            decoded_value, e
                        ))
                    })?;
                }
                "state" => {
                    options.state = Some(decoded_value.to_string());
                }
                _ => {}
            }
        }
    }

    Ok(options)
}

/// Builds a JSON response around an already-serialized body.
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_options() {
        // Empty query
        let options = parse_query_options(None).unwrap();
        assert_eq!(options, QueryOptions::default());

        // Seed and pretty
        let options = parse_query_options(Some("seed=42&pretty=true")).unwrap();
        assert_eq!(options.seed, Some(42));
        assert!(options.pretty);

        // Percent-encoded state filter
        let options = parse_query_options(Some("state=Uttar%20Pradesh")).unwrap();
        assert_eq!(options.state.as_deref(), Some("Uttar Pradesh"));

        // Unknown keys are ignored
        let options = parse_query_options(Some("cachebust=123&seed=7")).unwrap();
        assert_eq!(options.seed, Some(7));

        // Invalid seed
        assert!(parse_query_options(Some("seed=abc")).is_err());

        // Invalid pretty
        assert!(parse_query_options(Some("pretty=maybe")).is_err());
    }
}

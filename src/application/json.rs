//! JSON boundary for presentation-layer callers.
//!
//! Handlers take and return plain serde records; these helpers let a UI
//! layer pass JSON text straight through.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Decodes `input`, runs `handle`, and encodes the result.
///
/// # Errors
///
/// - `MALFORMED_INPUT` when `input` does not decode into `Q`
/// - whatever `handle` returns
/// - `INTERNAL_ERROR` if the result cannot be encoded
pub fn handle_json<Q, R>(
    input: &str,
    handle: impl FnOnce(Q) -> Result<R, DomainError>,
) -> Result<String, DomainError>
where
    Q: DeserializeOwned,
    R: Serialize,
{
    let request: Q = serde_json::from_str(input)?;
    let response = handle(request)?;
    serde_json::to_string(&response)
        .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))
}

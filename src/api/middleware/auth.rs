use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::error::ApiError;

/// Routes reachable without a token
pub const PUBLIC_PATHS: [&str; 1] = ["/health"];

/// Extract and validate Bearer token from Authorization header
pub fn validate_auth(headers: &HeaderMap, secret_key: &str) -> Result<(), ApiError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

    // Expected format: "Bearer <token>"
    let parts: Vec<&str> = auth_header.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(ApiError::unauthorized(
            "Invalid authorization header format. Expected: Bearer <token>",
        ));
    }

    if parts[1] != secret_key {
        return Err(ApiError::unauthorized("Invalid authentication token"));
    }

    Ok(())
}

pub async fn require_bearer(secret_key: String, req: Request, next: Next) -> Response {
    if PUBLIC_PATHS.contains(&req.uri().path()) {
        return next.run(req).await;
    }

    match validate_auth(req.headers(), &secret_key) {
        Ok(()) => next.run(req).await,
        Err(err) => {
            tracing::debug!("Rejected request to {}: {:?}", req.uri().path(), err);
            err.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_validate_auth() {
        assert!(validate_auth(&headers("Bearer s3cret"), "s3cret").is_ok());
        assert!(validate_auth(&headers("Bearer wrong"), "s3cret").is_err());
        assert!(validate_auth(&headers("Basic s3cret"), "s3cret").is_err());
        assert!(validate_auth(&HeaderMap::new(), "s3cret").is_err());
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ferrous_lookup_domain::DomainError;

/// Plain-text error response: 400 for rejected input, 500 for anything the
/// upstream exchange produced.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    pub fn message(&self) -> String {
        if self.0.is_client_error() {
            self.0.to_string()
        } else {
            format!("DNS query failed: {}", self.0)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}

use axum::response::IntoResponse;
use gamebay_server_app::ServiceError;

pub enum ApiError {
    Service(ServiceError),
    MethodNotAllowed,
}

impl ApiError {
    pub fn bad_request(msg: &str) -> Self {
        ApiError::Service(ServiceError::BadRequest(msg.to_string()))
    }

    pub fn unauthorized(msg: &str) -> Self {
        ApiError::Service(ServiceError::Unauthorized(msg.to_string()))
    }

    pub fn not_found(msg: &str) -> Self {
        ApiError::Service(ServiceError::NotFound(msg.to_string()))
    }

    pub fn internal(msg: &str) -> Self {
        ApiError::Service(ServiceError::Internal(msg.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::http::Response<axum::body::Body> {
        let (status, msg) = match self {
            ApiError::Service(ServiceError::NotFound(msg)) => {
                (axum::http::StatusCode::NOT_FOUND, msg)
            }
            ApiError::Service(ServiceError::Unauthorized(msg)) => {
                (axum::http::StatusCode::UNAUTHORIZED, msg)
            }
            ApiError::Service(ServiceError::BadRequest(msg)) => {
                (axum::http::StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Service(ServiceError::Forbidden(msg)) => {
                (axum::http::StatusCode::FORBIDDEN, msg)
            }
            ApiError::Service(ServiceError::Internal(msg)) => {
                log::error!("Internal error: {}", msg);
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::MethodNotAllowed => (
                axum::http::StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
        };
        let body = serde_json::json!({ "error": msg });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        ApiError::Service(value)
    }
}

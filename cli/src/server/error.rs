use chatgate::GatewayError;
use rocket::{
    Request, catch,
    http::Status,
    response::{self, Responder},
    serde::json::Json,
};
use serde::{Deserialize, Serialize};

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unprocessable(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::Unprocessable(_) => Status::UnprocessableEntity,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            ApiError::BadRequest(detail)
            | ApiError::Unprocessable(detail)
            | ApiError::Internal(detail) => detail,
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(value: GatewayError) -> Self {
        match value {
            GatewayError::Invalid(detail) => ApiError::Unprocessable(detail),
            GatewayError::Rejected(detail) => ApiError::BadRequest(detail),
            GatewayError::Failed(detail) => ApiError::Internal(detail),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(
        self,
        request: &'r Request<'_>,
    ) -> response::Result<'static> {
        let status = self.status();
        let body = ErrorBody {
            detail: self.detail().to_string(),
        };
        (status, Json(body)).respond_to(request)
    }
}

/// Fallback for statuses no route produced itself (unknown paths, oversized
/// bodies, ...).
#[catch(default)]
pub fn handle_error(
    status: Status,
    _request: &Request<'_>,
) -> (Status, Json<ErrorBody>) {
    let body = ErrorBody {
        detail: status.reason_lossy().to_string(),
    };
    (status, Json(body))
}

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use emojump_core::ParseTagError;
use serde::Serialize;

pub const INVALID_CATEGORY: &str = "/problems/invalid-category";
pub const INVALID_AXIS: &str = "/problems/invalid-axis";
pub const UNKNOWN_DICTIONARY: &str = "/problems/unknown-dictionary";
pub const MISSING_PARAMETER: &str = "/problems/missing-parameter";

#[derive(Debug, Serialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    problem_type: &'static str,
    title: &'static str,
    detail: String,
}

#[derive(Debug)]
pub struct ProblemResponse {
    status: StatusCode,
    body: ProblemDetails,
}

impl ProblemResponse {
    pub fn new<S: Into<String>>(status: StatusCode, problem_type: &'static str, detail: S) -> Self {
        Self {
            status,
            body: ProblemDetails {
                problem_type,
                title: status.canonical_reason().unwrap_or("error"),
                detail: detail.into(),
            },
        }
    }

    pub fn missing(parameter: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            MISSING_PARAMETER,
            format!("query parameter '{parameter}' is required"),
        )
    }

    /// Short label used for the `lookup_rejected_total` metric.
    pub fn reason(&self) -> &'static str {
        match self.body.problem_type {
            INVALID_CATEGORY => "category",
            INVALID_AXIS => "axis",
            UNKNOWN_DICTIONARY => "dictionary",
            _ => "missing",
        }
    }
}

impl From<ParseTagError> for ProblemResponse {
    fn from(err: ParseTagError) -> Self {
        let (status, problem_type) = match &err {
            ParseTagError::UnknownCategory(_) => (StatusCode::BAD_REQUEST, INVALID_CATEGORY),
            ParseTagError::UnknownAxis(_) => (StatusCode::BAD_REQUEST, INVALID_AXIS),
            ParseTagError::UnknownDictionary(_) => (StatusCode::NOT_FOUND, UNKNOWN_DICTIONARY),
        };
        Self::new(status, problem_type, err.to_string())
    }
}

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let mut response = Json(self.body).into_response();
        *response.status_mut() = self.status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

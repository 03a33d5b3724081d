use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Why a request did not produce a descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Resource not found")]
    RouteNotMatched,
    #[error("Missing resource parameter")]
    MissingParameter,
    #[error("Resource not found")]
    ResourceNotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::RouteNotMatched | Error::ResourceNotFound =>
                StatusCode::NOT_FOUND,
            Error::MissingParameter =>
                StatusCode::BAD_REQUEST,
            Error::MethodNotAllowed =>
                StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let mut response = (self.status(),
         [("content-type", "text/plain")],
         self.to_string()
        ).into_response();
        if self == Error::MethodNotAllowed {
            response.headers_mut()
                .insert("allow", HeaderValue::from_static("GET,HEAD"));
        }
        response
    }
}

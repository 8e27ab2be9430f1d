use actix_web::{ResponseError, http::StatusCode, web};
use coffer_server_core::{ErrorResponse, PublicErrorType};
use coffer_store::ResourceStore;

pub mod app;
pub mod config;
pub mod routes;

pub type Store = web::Data<ResourceStore>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] coffer_store::Error),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("config validation failed: {0}")]
    ValidationErrors(#[from] validator::ValidationErrors),

    #[error("io error: {0:?}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            Error::Store(coffer_store::Error::NotFound(path)) => {
                ErrorResponse::from_public_error(
                    PublicErrorType::NotFound,
                    Some(format!("'{path}' does not exist")),
                )
            },
            Error::InvalidPath(path) => {
                ErrorResponse::from_public_error(
                    PublicErrorType::NotFound,
                    Some(format!("'{path}' does not exist")),
                )
            },
            Error::InvalidBody(cause) => {
                ErrorResponse::from_public_error(
                    PublicErrorType::InvalidBody,
                    Some(format!("request body must be a JSON object: {cause}")),
                )
            },
            _ => ErrorResponse::internal(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Store(coffer_store::Error::NotFound(..)) | Error::InvalidPath(..) => {
                StatusCode::NOT_FOUND
            },
            Error::InvalidBody(..) => StatusCode::BAD_REQUEST,
            Error::Store(..)
            | Error::Config(..)
            | Error::ValidationErrors(..)
            | Error::IoError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse<actix_web::body::BoxBody> {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Handling error: {:?}", self);
        } else {
            tracing::debug!("Handling error: {}", self);
        }

        actix_web::HttpResponse::build(status).json(self.to_error_response())
    }
}

use crate::db::errors::DbError;
use crate::types::{Operation, Resource};
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Request used a verb the path isn't bound to
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Required query parameter absent or empty
    #[error("Missing query parameter '{name}'")]
    MissingParameter { name: &'static str },

    /// Identifier (query parameter or update body) present but not usable
    #[error("Invalid value '{value}' for query parameter '{name}'")]
    InvalidParameter { name: &'static str, value: String },

    /// Request body couldn't be decoded into the resource's shape
    #[error("Malformed {resource} body: {source}")]
    MalformedBody {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    /// Request body couldn't be read, e.g. it exceeds the body size limit
    #[error("Unreadable {resource} body: {source}")]
    UnreadableBody {
        resource: Resource,
        #[source]
        source: BytesRejection,
    },

    /// Decoded body breaks a domain rule
    #[error("{message}")]
    Validation { message: String },

    /// No record matches the lookup key
    #[error("{resource} not found")]
    NotFound { resource: Resource },

    /// No route matches the request path
    #[error("No route for {path}")]
    RouteNotFound { path: String },

    /// The database reported an error
    #[error("Failed to {operation} {resource}: {source}")]
    Persistence {
        resource: Resource,
        operation: Operation,
        #[source]
        source: DbError,
    },

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Wrap a database failure raised while performing `operation` on `resource`
    pub fn persistence(resource: Resource, operation: Operation, source: impl Into<DbError>) -> Self {
        Error::Persistence {
            resource,
            operation,
            source: source.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::MissingParameter { .. }
            | Error::InvalidParameter { .. }
            | Error::MalformedBody { .. }
            | Error::Validation { .. } => StatusCode::BAD_REQUEST,
            // 413 for an over-limit body, 400 otherwise
            Error::UnreadableBody { source, .. } => source.status(),
            Error::NotFound { .. } | Error::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            // Constraint violations and connectivity failures alike surface as 500
            Error::Persistence { .. } | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the plain-text message sent to the client, without internal details
    pub fn user_message(&self) -> String {
        match self {
            Error::MethodNotAllowed => "Método não permitido".to_string(),
            Error::MissingParameter { name: "codigo" } => "Código não fornecido".to_string(),
            Error::MissingParameter { .. } => "ID não fornecido".to_string(),
            Error::InvalidParameter { .. } => "ID inválido".to_string(),
            Error::MalformedBody { resource, .. } | Error::UnreadableBody { resource, .. } => {
                resource.decode_failure_message().to_string()
            }
            Error::Validation { message } => message.clone(),
            Error::NotFound { resource } => resource.not_found_message().to_string(),
            Error::RouteNotFound { .. } => "Rota não encontrada".to_string(),
            Error::Persistence { resource, operation, .. } => resource.failure_message(*operation).to_string(),
            Error::Other(_) => "Erro interno do servidor".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Persistence {
                source: DbError::Other(_), ..
            }
            | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Persistence { .. } => {
                tracing::error!("Database constraint error: {}", self);
            }
            _ => {
                tracing::debug!("Client error: {}", self);
            }
        }

        (self.status_code(), self.user_message()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

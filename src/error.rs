use thiserror::Error;

use crate::gateway::GatewayError;
use crate::property::TypeValidationError;
use crate::schema::{ClassKind, SchemaError};

/// Errors surfaced by managers, the result parser and the client.
#[derive(Debug, Error)]
pub enum OrmError {
    #[error("not authorized: the database rejected the supplied username and password")]
    Authorization,

    #[error("malformed response from the database ({source}); the response was:\n{body}")]
    MalformedResponse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("the property {property} is not a part of the class {class}")]
    UnknownProperty { property: String, class: String },

    #[error("{argument} cannot be connected by edges: {reason}")]
    InvalidEndpoint {
        argument: &'static str,
        reason: String,
    },

    #[error(transparent)]
    TypeValidation(#[from] TypeValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("{operation} on class {class} returned no record")]
    EmptyResponse {
        class: String,
        operation: &'static str,
    },

    #[error("record decode failed: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("model encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("class {class} is declared as {actual}, not {expected}")]
    ClassKindMismatch {
        class: String,
        expected: ClassKind,
        actual: ClassKind,
    },

    #[error("class {0} is not registered")]
    UnregisteredClass(String),
}

pub type OrmResult<T> = Result<T, OrmError>;

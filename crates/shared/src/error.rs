use thiserror::Error;

use crate::protocol::{
    Envelope, MSG_DATABASE_ERROR, MSG_FIELDS_REQUIRED, MSG_INVALID_EMAIL, MSG_METHOD_NOT_ALLOWED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("all fields are required")]
    MissingFields,
    #[error("email address is malformed")]
    InvalidEmail,
}

/// Every way a contact request can end without a stored row.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("method {0} is not allowed")]
    MethodNotAllowed(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl ContactError {
    /// Public envelope for this error. Persistence detail stays server side.
    pub fn envelope(&self) -> Envelope {
        let message = match self {
            Self::MethodNotAllowed(_) => MSG_METHOD_NOT_ALLOWED,
            Self::Validation(ValidationError::MissingFields) => MSG_FIELDS_REQUIRED,
            Self::Validation(ValidationError::InvalidEmail) => MSG_INVALID_EMAIL,
            Self::Persistence(_) => MSG_DATABASE_ERROR,
        };
        Envelope::danger(message)
    }
}

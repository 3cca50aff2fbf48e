use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ContactError, ValidationError},
    protocol::ContactSubmission,
    validation::is_valid_email,
};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(MessageId);

/// A contact submission that passed validation and may be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Checks presence of every field first, then the email shape.
    pub fn from_submission(submission: ContactSubmission) -> Result<Self, ContactError> {
        let (Some(name), Some(email), Some(message)) = (
            non_empty(submission.name),
            non_empty(submission.email),
            non_empty(submission.message),
        ) else {
            return Err(ContactError::Validation(ValidationError::MissingFields));
        };

        if !is_valid_email(&email) {
            return Err(ContactError::Validation(ValidationError::InvalidEmail));
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

/// A lone `"0"` counts as blank, like PHP's `empty()` on form input.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "0")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

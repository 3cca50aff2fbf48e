use std::sync::Arc;

use shared::{
    domain::{ContactMessage, MessageId},
    error::ContactError,
    protocol::{ContactSubmission, Envelope, MSG_SENT},
};
use storage::ContactStore;
use tracing::{error, info, warn};

pub const SUBMIT_METHOD: &str = "POST";

#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn ContactStore>,
}

impl ApiContext {
    pub fn new(store: impl ContactStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Terminal state of one contact request before the envelope is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStage {
    Rejected,
    Persisted(MessageId),
    PersistFailed,
}

#[derive(Debug, Clone)]
pub struct ContactOutcome {
    pub stage: ContactStage,
    pub envelope: Envelope,
}

pub fn contact_route() -> &'static str {
    "/contact"
}

/// Runs one submission through method check, field validation and insert.
/// Never fails: every error becomes a `danger` envelope.
pub async fn submit_contact(ctx: &ApiContext, method: &str, body: &[u8]) -> ContactOutcome {
    match accept(ctx, method, body).await {
        Ok(message_id) => {
            info!(message_id = message_id.0, "contact message accepted");
            ContactOutcome {
                stage: ContactStage::Persisted(message_id),
                envelope: Envelope::success(MSG_SENT),
            }
        }
        Err(err @ ContactError::Persistence(_)) => {
            error!(error = %err, "failed to store contact message");
            ContactOutcome {
                stage: ContactStage::PersistFailed,
                envelope: err.envelope(),
            }
        }
        Err(err) => {
            warn!(error = %err, "contact submission rejected");
            ContactOutcome {
                stage: ContactStage::Rejected,
                envelope: err.envelope(),
            }
        }
    }
}

async fn accept(ctx: &ApiContext, method: &str, body: &[u8]) -> Result<MessageId, ContactError> {
    if method != SUBMIT_METHOD {
        return Err(ContactError::MethodNotAllowed(method.to_string()));
    }

    let message = ContactMessage::from_submission(ContactSubmission::from_json_lenient(body))?;

    ctx.store
        .insert_contact_message(&message)
        .await
        .map_err(persistence)
}

fn persistence(err: anyhow::Error) -> ContactError {
    ContactError::Persistence(format!("{err:#}"))
}

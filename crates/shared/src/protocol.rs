use serde::{Deserialize, Serialize};

pub const MSG_SENT: &str = "Message envoyé avec succès !";
pub const MSG_FIELDS_REQUIRED: &str = "Tous les champs sont obligatoires.";
pub const MSG_INVALID_EMAIL: &str = "Email invalide.";
pub const MSG_DATABASE_ERROR: &str = "Erreur lors de l'enregistrement dans la base de données.";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Méthode non autorisée.";

/// Body posted by the contact form. The name travels as `nom` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(rename = "nom", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    /// Anything that is not a JSON object with string fields reads as an
    /// empty submission, so it fails the required-fields check.
    pub fn from_json_lenient(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeKind {
    Success,
    Danger,
}

/// The `{type, message}` object returned for every contact request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: EnvelopeKind,
    pub message: String,
}

impl Envelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: EnvelopeKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: EnvelopeKind::Danger,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == EnvelopeKind::Success
    }
}

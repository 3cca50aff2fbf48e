use reqwest::Client;
use shared::protocol::{ContactSubmission, Envelope};
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("contact request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid contact endpoint: {0}")]
    Url(#[from] url::ParseError),
}

/// Posts the contact form to the submission endpoint.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: Client,
    endpoint: Url,
}

impl ContactClient {
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Joins `route` onto `server_url`, e.g. `http://host:8080` + `/contact`.
    pub fn for_server(server_url: &str, route: &str) -> Result<Self, ClientError> {
        let endpoint = Url::parse(server_url)?.join(route)?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The endpoint answers 200 for rejections too; inspect the envelope.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<Envelope, ClientError> {
        let envelope: Envelope = self
            .http
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(endpoint = %self.endpoint, kind = ?envelope.kind, "contact envelope received");
        Ok(envelope)
    }
}

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use coverly_core::checkout::{CartDraft, CartReceipt, CheckoutGateway};
use coverly_core::errors::ApplicationError;
use secrecy::{ExposeSecret, SecretString};

/// Posts cart drafts to the remote commerce endpoint. The endpoint owns
/// cart lifecycle and checkout URLs; we only hand the draft over.
pub struct HttpCheckoutGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl HttpCheckoutGateway {
    pub fn new(
        endpoint: String,
        api_key: Option<SecretString>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, endpoint, api_key })
    }
}

#[async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn create_cart(&self, draft: &CartDraft) -> Result<CartReceipt, ApplicationError> {
        let mut request = self.client.post(&self.endpoint).json(draft);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key.expose_secret());
        }

        let response = request.send().await.map_err(|error| {
            ApplicationError::Integration(format!("cart request failed: {error}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::Integration(format!(
                "cart service returned {status}"
            )));
        }

        response.json::<CartReceipt>().await.map_err(|error| {
            ApplicationError::Integration(format!("cart response was malformed: {error}"))
        })
    }
}

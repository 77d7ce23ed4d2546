use super::IntegrationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};

/// A payment intent created on the hosted payment API. The frontend finishes
/// the charge with `client_secret`; the backend only stores the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_intent(
        &self,
        amount_cents: i64,
        currency: &str,
    ) -> Result<PaymentIntent, IntegrationError>;
}

/// Live gateway: one POST against the hosted payment-intent endpoint.
pub struct HostedPaymentGateway {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl HostedPaymentGateway {
    pub fn new(base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            secret_key: secret_key.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HostedPaymentGateway {
    #[instrument(skip(self))]
    async fn create_intent(
        &self,
        amount_cents: i64,
        currency: &str,
    ) -> Result<PaymentIntent, IntegrationError> {
        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(&self.secret_key)
            .json(&json!({ "amount": amount_cents, "currency": currency }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntegrationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let intent: PaymentIntent = response.json().await?;
        info!(intent_id = %intent.id, "Payment intent created");
        Ok(intent)
    }
}

//! Payment Service (proxy)
//!
//! Payments are not processed locally; every call is forwarded to the
//! external payment service and its failures surface to the caller.
//! Nothing is persisted here, only the opaque `order_id` travels through.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payment record as returned by the upstream service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    pub order_id: String,
    pub amount: Decimal,
    pub method: Option<String>,
}

/// Create payment payload forwarded upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub order_id: String,
    pub amount: Decimal,
    pub method: Option<String>,
}

/// Payment proxy errors
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("payment service returned {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub type PaymentResult<T> = Result<T, PaymentError>;

/// HTTP client for the external payment service
#[derive(Clone, Debug)]
pub struct PaymentService {
    client: reqwest::Client,
    base_url: String,
}

impl PaymentService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET /payments/getByOrderId/{order_id} upstream
    pub async fn get_by_order_id(&self, order_id: &str) -> PaymentResult<Payment> {
        let url = format!("{}/payments/getByOrderId/{}", self.base_url, order_id);
        let response = self.client.get(&url).send().await?;
        Self::into_payment(response).await
    }

    /// POST /payments upstream
    pub async fn create(&self, payload: &PaymentCreate) -> PaymentResult<Payment> {
        let url = format!("{}/payments", self.base_url);
        let response = self.client.post(&url).json(payload).send().await?;
        Self::into_payment(response).await
    }

    async fn into_payment(response: reqwest::Response) -> PaymentResult<Payment> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Payment service returned an error");
            return Err(PaymentError::Upstream { status, body });
        }
        Ok(response.json().await?)
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Backend-issued handle consumed by the payment widget to initiate a
/// charge. Single-use: discarded once the widget has opened with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDescriptor {
    pub id: String,
    /// Amount in minor units (paise), the gateway's convention.
    pub amount: i64,
    pub currency: String,
    /// Publishable gateway key the widget is initialised with.
    pub key: String,
}

/// Opaque identifiers produced by the gateway widget on completion. The
/// client forwards these verbatim; authenticity is verified by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// What the widget reported back. Replaces the success/dismiss callback
/// pair with a single typed outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The user completed payment; the gateway issued identifiers.
    Completed(PaymentResult),
    /// The user closed the widget without paying. The draft stays intact.
    Dismissed,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Payment widget script failed to load: {0}")]
    ScriptLoad(String),

    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

/// Seam to the third-party checkout widget.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Make sure the widget script is present. Safe to call repeatedly; the
    /// script must be fetched at most once per process.
    async fn ensure_loaded(&self) -> Result<(), GatewayError>;

    /// Open the widget with an order descriptor and wait for the user to
    /// either complete payment or dismiss it.
    async fn open_checkout(&self, order: &OrderDescriptor) -> Result<CheckoutOutcome, GatewayError>;
}

/// Scriptable gateway used by the flow tests and local development.
pub struct MockGateway {
    loaded: AtomicBool,
    script_fetches: AtomicUsize,
    fail_load: bool,
    outcomes: Mutex<Vec<CheckoutOutcome>>,
    opened_with: Mutex<Vec<OrderDescriptor>>,
}

impl MockGateway {
    /// A gateway that resolves every checkout with the given outcome.
    pub fn with_outcome(outcome: CheckoutOutcome) -> Self {
        MockGateway {
            loaded: AtomicBool::new(false),
            script_fetches: AtomicUsize::new(0),
            fail_load: false,
            outcomes: Mutex::new(vec![outcome]),
            opened_with: Mutex::new(Vec::new()),
        }
    }

    /// A gateway whose script never loads.
    pub fn failing_script() -> Self {
        MockGateway {
            loaded: AtomicBool::new(false),
            script_fetches: AtomicUsize::new(0),
            fail_load: true,
            outcomes: Mutex::new(Vec::new()),
            opened_with: Mutex::new(Vec::new()),
        }
    }

    /// How many times the widget script was actually fetched.
    pub fn script_fetches(&self) -> usize {
        self.script_fetches.load(Ordering::SeqCst)
    }

    /// Descriptors the widget was opened with, in order.
    pub fn opened_with(&self) -> Vec<OrderDescriptor> {
        self.opened_with.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn ensure_loaded(&self) -> Result<(), GatewayError> {
        if self.fail_load {
            return Err(GatewayError::ScriptLoad("network error".to_string()));
        }
        // Only the first call injects the script; later calls find it
        // already present.
        if !self.loaded.swap(true, Ordering::SeqCst) {
            self.script_fetches.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("payment widget script injected");
        }
        Ok(())
    }

    async fn open_checkout(&self, order: &OrderDescriptor) -> Result<CheckoutOutcome, GatewayError> {
        if !self.loaded.load(Ordering::SeqCst) {
            return Err(GatewayError::Gateway("widget script not loaded".to_string()));
        }
        tracing::debug!(order_id = %order.id, amount = order.amount, "opening payment widget");
        self.opened_with.lock().unwrap().push(order.clone());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(GatewayError::Gateway("no outcome scripted".to_string()));
        }
        Ok(outcomes.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn script_is_fetched_at_most_once() {
        let gateway = MockGateway::with_outcome(CheckoutOutcome::Dismissed);

        gateway.ensure_loaded().await.unwrap();
        gateway.ensure_loaded().await.unwrap();

        assert_eq!(gateway.script_fetches(), 1);
    }

    #[tokio::test]
    async fn failing_script_aborts() {
        let gateway = MockGateway::failing_script();
        let err = gateway.ensure_loaded().await.unwrap_err();
        assert!(matches!(err, GatewayError::ScriptLoad(_)));
    }

    #[tokio::test]
    async fn open_before_load_is_an_error() {
        let gateway = MockGateway::with_outcome(CheckoutOutcome::Dismissed);
        let order = OrderDescriptor {
            id: "order_1".to_string(),
            amount: 40000,
            currency: "INR".to_string(),
            key: "rzp_test".to_string(),
        };
        assert!(gateway.open_checkout(&order).await.is_err());
    }
}

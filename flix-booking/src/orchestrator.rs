use crate::carryover::{stash_draft, take_draft, DraftStore};
use crate::draft::{BookingDraft, DraftError};
use crate::flow::{CheckoutFlow, FlowError};
use crate::routes;
use chrono::Utc;
use flix_core::api::{ApiError, BackendApi, CreateOrderRequest, VerifyPaymentRequest};
use flix_core::payment::{CheckoutOutcome, GatewayError, PaymentGateway};
use flix_shared::Masked;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    /// The backend answered the verification call with a non-success
    /// status. No navigation happens; the user may restart from the draft.
    #[error("Payment verification rejected with status {status:?}")]
    VerificationRejected { status: String },
}

/// Where a finished attempt leaves the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutResult {
    /// No active session. The draft was stashed and the caller should
    /// navigate to the login route, which carries the return URL.
    LoginRequired { login_url: String },
    /// Payment verified; navigate to the confirmation route.
    Confirmed { booking_id: String, route: String },
    /// The user closed the widget without paying. The draft is untouched
    /// and the attempt can be restarted.
    Dismissed,
}

/// Drives one booking attempt through its five steps: session gate, order
/// initiation, gateway bootstrap, widget open, verification. Strictly
/// sequential; nothing here retries, and any hung call simply blocks the
/// attempt.
pub struct CheckoutOrchestrator {
    api: Arc<dyn BackendApi>,
    gateway: Arc<dyn PaymentGateway>,
    drafts: Arc<dyn DraftStore>,
}

impl CheckoutOrchestrator {
    pub fn new(
        api: Arc<dyn BackendApi>,
        gateway: Arc<dyn PaymentGateway>,
        drafts: Arc<dyn DraftStore>,
    ) -> Self {
        CheckoutOrchestrator {
            api,
            gateway,
            drafts,
        }
    }

    /// Run one attempt for `draft`, advancing `flow` transition by
    /// transition. Order creation is only ever reached with a confirmed
    /// session, and the widget is only ever opened with a descriptor for
    /// the same computed total.
    pub async fn checkout(
        &self,
        flow: &mut CheckoutFlow,
        draft: &BookingDraft,
    ) -> Result<CheckoutResult, CheckoutError> {
        let attempt_id = flow.attempt_id();
        tracing::info!(%attempt_id, movie_id = %draft.movie_id, "starting checkout attempt");

        // Session gate.
        let session = match self.api.check_session().await {
            Ok(session) => session,
            Err(e) => {
                flow.failed("session-gate", &e.to_string())?;
                return Err(e.into());
            }
        };

        if !session.is_logged_in {
            stash_draft(self.drafts.as_ref(), draft);
            flow.require_login()?;
            let login_url = routes::login_with_return(draft)?;
            tracing::info!(%attempt_id, "no active session, detouring to login");
            return Ok(CheckoutResult::LoginRequired { login_url });
        }

        let email = session
            .user
            .as_ref()
            .map(|u| u.email().to_string())
            .unwrap_or_default();

        // Order initiation for the computed total.
        let total = draft.total();
        let request = CreateOrderRequest {
            amount: total,
            currency: "INR".to_string(),
            receipt: format!("rcpt_{}", Utc::now().timestamp_millis()),
        };
        let order = match self.api.create_order(&request).await {
            Ok(order) => order,
            Err(e) => {
                flow.failed("create-order", &e.to_string())?;
                return Err(e.into());
            }
        };
        flow.order_created(&order.id, order.amount, &request.receipt)?;

        // Gateway bootstrap; idempotent, the script is fetched at most once.
        if let Err(e) = self.gateway.ensure_loaded().await {
            flow.failed("gateway-bootstrap", &e.to_string())?;
            return Err(e.into());
        }

        flow.widget_opened(&order.id)?;
        let outcome = match self.gateway.open_checkout(&order).await {
            Ok(outcome) => outcome,
            Err(e) => {
                flow.failed("widget", &e.to_string())?;
                return Err(e.into());
            }
        };

        match outcome {
            CheckoutOutcome::Dismissed => {
                flow.dismissed()?;
                tracing::info!(%attempt_id, "payment widget dismissed, draft kept");
                Ok(CheckoutResult::Dismissed)
            }
            CheckoutOutcome::Completed(result) => {
                let verification = VerifyPaymentRequest {
                    order_id: result.order_id,
                    payment_id: result.payment_id,
                    signature: result.signature,
                    movie_id: draft.movie_id.clone(),
                    theater_id: draft.theater_id.clone(),
                    showtime: draft.showtime.clone(),
                    date: draft.date.clone(),
                    category: draft.category.clone(),
                    seats: draft.seats_csv(),
                    food_items: serde_json::to_value(&draft.food_items)
                        .map_err(|e| DraftError::InvalidFood(e.to_string()))?,
                    amount: total,
                    email: Masked::new(email),
                };

                let response = match self.api.verify_payment(&verification).await {
                    Ok(response) => response,
                    Err(e) => {
                        flow.failed("verify-payment", &e.to_string())?;
                        return Err(e.into());
                    }
                };

                if response.is_success() {
                    let booking_id = match response.booking_id {
                        Some(id) => id,
                        None => {
                            flow.failed("verify-payment", "success without booking id")?;
                            return Err(ApiError::Schema(
                                "verification succeeded without a booking id".to_string(),
                            )
                            .into());
                        }
                    };
                    flow.confirmed(&booking_id)?;
                    tracing::info!(%attempt_id, %booking_id, "payment verified");
                    Ok(CheckoutResult::Confirmed {
                        route: routes::booking_success(&booking_id),
                        booking_id,
                    })
                } else {
                    flow.failed("verify-payment", &response.status)?;
                    Err(CheckoutError::VerificationRejected {
                        status: response.status,
                    })
                }
            }
        }
    }

    /// Replay a stashed draft after login: remove it from the store and
    /// return the booking-summary route with all fields re-encoded. `None`
    /// when nothing was stashed (or the entry was unreadable).
    pub fn resume_after_login(&self) -> Result<Option<String>, CheckoutError> {
        match take_draft(self.drafts.as_ref()) {
            Some(draft) => Ok(Some(routes::booking_summary(&draft)?)),
            None => Ok(None),
        }
    }
}

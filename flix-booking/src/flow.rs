use chrono::Utc;
use flix_shared::CheckoutEvent;
use uuid::Uuid;

/// States of one booking attempt. `Confirmed` and `Failed` are terminal;
/// a dismissal returns to `Draft` so the user can re-attempt with the same
/// selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Draft,
    AwaitingLogin,
    OrderCreated,
    WidgetOpen,
    Confirmed,
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Invalid checkout transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: CheckoutState,
        to: CheckoutState,
    },
}

/// Explicit state machine for a single checkout attempt. Transitions are
/// guarded so the orchestration steps can be exercised one by one without a
/// live widget, and every transition leaves an audit event behind.
pub struct CheckoutFlow {
    attempt_id: Uuid,
    state: CheckoutState,
    events: Vec<CheckoutEvent>,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        CheckoutFlow {
            attempt_id: Uuid::new_v4(),
            state: CheckoutState::Draft,
            events: Vec::new(),
        }
    }

    pub fn attempt_id(&self) -> Uuid {
        self.attempt_id
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Audit trail for this attempt, in transition order.
    pub fn events(&self) -> &[CheckoutEvent] {
        &self.events
    }

    /// The session gate found no active session; the draft has been stashed.
    pub fn require_login(&mut self) -> Result<(), FlowError> {
        self.guard(CheckoutState::Draft, CheckoutState::AwaitingLogin)?;
        self.state = CheckoutState::AwaitingLogin;
        self.record(CheckoutEvent::DraftStashed {
            attempt_id: self.attempt_id,
            timestamp: now_millis(),
        });
        Ok(())
    }

    /// Login completed and the stashed draft was replayed.
    pub fn restore(&mut self) -> Result<(), FlowError> {
        self.guard(CheckoutState::AwaitingLogin, CheckoutState::Draft)?;
        self.state = CheckoutState::Draft;
        Ok(())
    }

    /// A gateway order now exists for the computed total.
    pub fn order_created(
        &mut self,
        order_id: &str,
        amount_minor: i64,
        receipt: &str,
    ) -> Result<(), FlowError> {
        self.guard(CheckoutState::Draft, CheckoutState::OrderCreated)?;
        self.state = CheckoutState::OrderCreated;
        self.record(CheckoutEvent::OrderCreated {
            attempt_id: self.attempt_id,
            order_id: order_id.to_string(),
            amount_minor,
            receipt: receipt.to_string(),
            timestamp: now_millis(),
        });
        Ok(())
    }

    /// The widget opened with the order descriptor.
    pub fn widget_opened(&mut self, order_id: &str) -> Result<(), FlowError> {
        self.guard(CheckoutState::OrderCreated, CheckoutState::WidgetOpen)?;
        self.state = CheckoutState::WidgetOpen;
        self.record(CheckoutEvent::WidgetOpened {
            attempt_id: self.attempt_id,
            order_id: order_id.to_string(),
            timestamp: now_millis(),
        });
        Ok(())
    }

    /// The user closed the widget without paying. Back to Draft; the
    /// selections stay intact for a re-attempt.
    pub fn dismissed(&mut self) -> Result<(), FlowError> {
        self.guard(CheckoutState::WidgetOpen, CheckoutState::Draft)?;
        self.state = CheckoutState::Draft;
        self.record(CheckoutEvent::WidgetDismissed {
            attempt_id: self.attempt_id,
            timestamp: now_millis(),
        });
        Ok(())
    }

    /// The backend verified the payment and issued a booking id.
    pub fn confirmed(&mut self, booking_id: &str) -> Result<(), FlowError> {
        self.guard(CheckoutState::WidgetOpen, CheckoutState::Confirmed)?;
        self.state = CheckoutState::Confirmed;
        self.record(CheckoutEvent::PaymentVerified {
            attempt_id: self.attempt_id,
            booking_id: booking_id.to_string(),
            timestamp: now_millis(),
        });
        Ok(())
    }

    /// The attempt ended in an error. Allowed from any non-terminal state;
    /// `stage` names the step that failed.
    pub fn failed(&mut self, stage: &str, reason: &str) -> Result<(), FlowError> {
        if matches!(self.state, CheckoutState::Confirmed | CheckoutState::Failed) {
            return Err(FlowError::InvalidTransition {
                from: self.state,
                to: CheckoutState::Failed,
            });
        }
        self.state = CheckoutState::Failed;
        self.record(CheckoutEvent::CheckoutFailed {
            attempt_id: self.attempt_id,
            stage: stage.to_string(),
            reason: reason.to_string(),
            timestamp: now_millis(),
        });
        Ok(())
    }

    fn guard(&self, expected: CheckoutState, to: CheckoutState) -> Result<(), FlowError> {
        if self.state != expected {
            return Err(FlowError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        Ok(())
    }

    fn record(&mut self, event: CheckoutEvent) {
        tracing::debug!(attempt_id = %self.attempt_id, ?event, "checkout transition");
        self.events.push(event);
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_confirmed() {
        let mut flow = CheckoutFlow::new();

        flow.order_created("order_1", 40000, "rcpt_1").unwrap();
        flow.widget_opened("order_1").unwrap();
        flow.confirmed("B123").unwrap();

        assert_eq!(flow.state(), CheckoutState::Confirmed);
        assert_eq!(flow.events().len(), 3);
        assert!(flow
            .events()
            .iter()
            .all(|e| e.attempt_id() == flow.attempt_id()));
    }

    #[test]
    fn dismissal_returns_to_draft() {
        let mut flow = CheckoutFlow::new();
        flow.order_created("order_1", 40000, "rcpt_1").unwrap();
        flow.widget_opened("order_1").unwrap();
        flow.dismissed().unwrap();

        assert_eq!(flow.state(), CheckoutState::Draft);
        // A fresh attempt can start over from Draft.
        flow.order_created("order_2", 40000, "rcpt_2").unwrap();
    }

    #[test]
    fn login_detour_and_restore() {
        let mut flow = CheckoutFlow::new();
        flow.require_login().unwrap();
        assert_eq!(flow.state(), CheckoutState::AwaitingLogin);
        flow.restore().unwrap();
        assert_eq!(flow.state(), CheckoutState::Draft);
    }

    #[test]
    fn cannot_confirm_without_open_widget() {
        let mut flow = CheckoutFlow::new();
        let err = flow.confirmed("B123").unwrap_err();
        assert!(matches!(err, FlowError::InvalidTransition { .. }));
    }

    #[test]
    fn terminal_states_reject_further_failures() {
        let mut flow = CheckoutFlow::new();
        flow.order_created("order_1", 100, "rcpt").unwrap();
        flow.widget_opened("order_1").unwrap();
        flow.confirmed("B1").unwrap();
        assert!(flow.failed("verify", "late").is_err());
    }
}

use uuid::Uuid;

/// Audit events emitted by the checkout flow. One event per state
/// transition, all carrying the id of the checkout attempt that produced
/// them so a single attempt can be reconstructed from logs.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutEvent {
    /// The session gate found no active session and the draft was stashed
    /// for replay after login.
    DraftStashed {
        attempt_id: Uuid,
        timestamp: i64,
    },
    /// A gateway order was created for the computed total.
    OrderCreated {
        attempt_id: Uuid,
        order_id: String,
        amount_minor: i64,
        receipt: String,
        timestamp: i64,
    },
    /// The payment widget was opened with an order descriptor.
    WidgetOpened {
        attempt_id: Uuid,
        order_id: String,
        timestamp: i64,
    },
    /// The user closed the widget without completing payment.
    WidgetDismissed {
        attempt_id: Uuid,
        timestamp: i64,
    },
    /// The backend confirmed the payment and issued a booking id.
    PaymentVerified {
        attempt_id: Uuid,
        booking_id: String,
        timestamp: i64,
    },
    /// The attempt ended in an error; `stage` names the step that failed.
    CheckoutFailed {
        attempt_id: Uuid,
        stage: String,
        reason: String,
        timestamp: i64,
    },
}

impl CheckoutEvent {
    /// The attempt this event belongs to.
    pub fn attempt_id(&self) -> Uuid {
        match self {
            CheckoutEvent::DraftStashed { attempt_id, .. }
            | CheckoutEvent::OrderCreated { attempt_id, .. }
            | CheckoutEvent::WidgetOpened { attempt_id, .. }
            | CheckoutEvent::WidgetDismissed { attempt_id, .. }
            | CheckoutEvent::PaymentVerified { attempt_id, .. }
            | CheckoutEvent::CheckoutFailed { attempt_id, .. } => *attempt_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_roundtrips_through_json() {
        let event = CheckoutEvent::OrderCreated {
            attempt_id: Uuid::new_v4(),
            order_id: "order_abc".to_string(),
            amount_minor: 40000,
            receipt: "rcpt_1700000000000".to_string(),
            timestamp: 1_700_000_000,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ORDER_CREATED"));
        let back: CheckoutEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

use crate::draft::{BookingDraft, DraftError};

/// Builders for the client-side navigation targets the flow can land on.
/// Kept in one place so the query encodings stay consistent with the
/// draft codec.

/// The booking-summary route with every draft field re-encoded as query
/// parameters. Used both for direct navigation and for the post-login
/// replay.
pub fn booking_summary(draft: &BookingDraft) -> Result<String, DraftError> {
    Ok(format!("/booking-summary?{}", draft.to_query()?))
}

/// The login route carrying the summary route as a return URL, so the
/// detour lands the user back where they left off.
pub fn login_with_return(draft: &BookingDraft) -> Result<String, DraftError> {
    let next = booking_summary(draft)?;
    let query = serde_urlencoded::to_string([("next", next.as_str())])
        .map_err(|e| DraftError::Query(e.to_string()))?;
    Ok(format!("/login?{}", query))
}

/// The confirmation route for a verified payment.
pub fn booking_success(booking_id: &str) -> String {
    let query = serde_urlencoded::to_string([("bookingId", booking_id)])
        .unwrap_or_else(|_| format!("bookingId={}", booking_id));
    format!("/booking-success?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flix_core::Money;

    fn draft() -> BookingDraft {
        BookingDraft {
            movie_id: "42".to_string(),
            theater_id: "th_9".to_string(),
            date: "2026-09-01".to_string(),
            showtime: "7:30 PM".to_string(),
            category: "Gold".to_string(),
            seats: vec!["B4".to_string()],
            food_items: Vec::new(),
            ticket_price: Money::from_major(250.0),
        }
    }

    #[test]
    fn summary_route_roundtrips_through_draft_codec() {
        let route = booking_summary(&draft()).unwrap();
        let query = route.strip_prefix("/booking-summary?").unwrap();
        assert_eq!(BookingDraft::from_query(query).unwrap(), draft());
    }

    #[test]
    fn login_route_carries_return_url() {
        let route = login_with_return(&draft()).unwrap();
        assert!(route.starts_with("/login?next=%2Fbooking-summary%3F"));
    }

    #[test]
    fn success_route_carries_exactly_the_booking_id() {
        assert_eq!(booking_success("B123"), "/booking-success?bookingId=B123");
    }
}

use crate::http::MovieflixClient;
use crate::models::{
    BookingContext, BookingRecord, CancellationReceipt, Envelope, UserBooking,
};
use flix_core::ApiError;
use serde::Deserialize;
use serde_json::json;

impl MovieflixClient {
    /// Movie and theater details backing the booking-summary page
    /// (`GET /booking/details`).
    pub async fn booking_context(
        &self,
        movie_id: &str,
        theater_id: &str,
    ) -> Result<BookingContext, ApiError> {
        self.get_json(
            "/booking/details",
            &[("movieId", movie_id), ("theaterId", theater_id)],
        )
        .await
    }

    /// Fetch one committed booking by reference or numeric id.
    pub async fn booking(&self, reference: &str) -> Result<BookingRecord, ApiError> {
        let envelope: Envelope<BookingRecord> =
            self.get_json(&format!("/booking/{}", reference), &[]).await?;
        envelope.into_data()
    }

    /// A customer's booking history, newest first as the backend orders it.
    pub async fn user_bookings(&self, user_id: i64) -> Result<Vec<UserBooking>, ApiError> {
        let envelope: Envelope<Vec<UserBooking>> = self
            .get_json(&format!("/booking/user/{}", user_id), &[])
            .await?;
        envelope.into_data()
    }

    /// Cancel a booking before its showtime. Backend refusals (already
    /// cancelled, showtime passed) come back as `ApiError::Rejected` with
    /// the error code and message verbatim.
    pub async fn cancel_booking(&self, reference: &str) -> Result<CancellationReceipt, ApiError> {
        self.post_json(&format!("/booking/{}/cancel", reference), &json!({}))
            .await
    }

    /// Download the ticket PDF for a booking.
    pub async fn ticket_pdf(&self, reference: &str) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(&format!("/booking/{}/ticket", reference), &[])
            .await
    }

    /// Seats already taken for a showtime, used to grey out the seat map.
    pub async fn booked_seats(
        &self,
        movie_id: &str,
        theater_id: &str,
        showtime: &str,
        date: &str,
    ) -> Result<Vec<String>, ApiError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct BookedSeatsResponse {
            booked_seats: Vec<String>,
        }

        let response: BookedSeatsResponse = self
            .get_json(
                "/booking/booked-seats",
                &[
                    ("movieId", movie_id),
                    ("theaterId", theater_id),
                    ("showtime", showtime),
                    ("date", date),
                ],
            )
            .await?;
        Ok(response.booked_seats)
    }
}

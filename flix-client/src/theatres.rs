use crate::http::MovieflixClient;
use crate::models::{ShowtimeSlot, Theatre};
use flix_core::ApiError;

impl MovieflixClient {
    /// Theatres near a coordinate pair (`GET /theatres/nearby`).
    pub async fn nearby_theatres(&self, lat: f64, lon: f64) -> Result<Vec<Theatre>, ApiError> {
        let lat = lat.to_string();
        let lon = lon.to_string();
        self.get_json("/theatres/nearby", &[("lat", &lat), ("lon", &lon)])
            .await
    }

    /// Persist a selected theatre so bookings can reference it
    /// (`POST /theatres/save`).
    pub async fn save_theatre(&self, theatre: &Theatre) -> Result<Theatre, ApiError> {
        self.post_json("/theatres/save", theatre).await
    }

    /// Bookable slots for a movie at a theatre, each carrying its priced
    /// seat categories (`GET /showtimes`). The backend rejects dates more
    /// than two days out; that refusal surfaces as a rejection with the
    /// backend's message.
    pub async fn showtimes(
        &self,
        theatre_id: &str,
        movie_id: i64,
        date: Option<&str>,
    ) -> Result<Vec<ShowtimeSlot>, ApiError> {
        let movie_id = movie_id.to_string();
        let mut query: Vec<(&str, &str)> =
            vec![("theatreId", theatre_id), ("movieId", &movie_id)];
        if let Some(date) = date {
            query.push(("date", date));
        }
        self.get_json("/showtimes", &query).await
    }
}

use flix_booking::draft::FoodItemId;
use flix_core::{ApiError, Money};
use flix_shared::Masked;
use serde::{Deserialize, Serialize};

/// Generic `{ "status": ..., "data": ... }` envelope several booking
/// endpoints wrap their payloads in.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope<T> {
    pub status: String,
    pub data: T,
}

impl<T> Envelope<T> {
    /// The payload, provided the envelope reports success. A non-success
    /// status inside a 2xx response is a contract violation, not data.
    pub(crate) fn into_data(self) -> Result<T, ApiError> {
        if self.status != "success" {
            tracing::warn!(status = %self.status, "envelope carried a non-success status");
            return Err(ApiError::Schema(format!(
                "envelope status {:?} where \"success\" was expected",
                self.status
            )));
        }
        Ok(self.data)
    }
}

/// Movie block of a booking payload. The details endpoint calls the title
/// `name`, the record endpoint calls it `title`; both land here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Number, or the literal `"N/A"` when the catalog has no rating.
    #[serde(default)]
    pub rating: serde_json::Value,
    #[serde(default)]
    pub synopsis: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheaterSummary {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub rating: serde_json::Value,
}

/// Movie and theater details for the booking-summary page
/// (`GET /booking/details`).
#[derive(Debug, Clone, Deserialize)]
pub struct BookingContext {
    pub movie: MovieSummary,
    pub theater: TheaterSummary,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfo {
    pub id: i64,
    pub reference: String,
    pub date: String,
    pub time: String,
    #[serde(with = "flix_core::money::as_major")]
    pub total_amount: Money,
    pub seats: Vec<String>,
    pub payment_status: String,
    pub payment_method: String,
    pub booking_time: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedFoodItem {
    pub name: String,
    pub quantity: u32,
    #[serde(with = "flix_core::money::as_major")]
    pub price: Money,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A committed booking (`GET /booking/{reference}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub booking: BookingInfo,
    #[serde(default)]
    pub food_items: Vec<BookedFoodItem>,
    pub movie: MovieSummary,
    pub theater: TheaterSummary,
}

/// One row of a customer's booking history (`GET /booking/user/{id}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBooking {
    pub id: i64,
    pub reference: String,
    pub movie_title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub showtime: String,
    pub date: String,
    #[serde(with = "flix_core::money::as_major")]
    pub total_amount: Money,
    pub status: String,
    #[serde(default)]
    pub rating: serde_json::Value,
    #[serde(default)]
    pub genres: Vec<String>,
    pub is_expired: bool,
    pub time_status: String,
    /// Epoch milliseconds of the show start.
    pub show_date_time: i64,
}

/// Successful cancellation receipt. Rejections (already cancelled, showtime
/// passed) arrive as non-2xx responses and surface as `ApiError::Rejected`
/// with the backend's code and message verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct CancellationReceipt {
    pub status: String,
    pub message: String,
    pub booking_reference: String,
    pub refund_status: String,
    pub cancellation_time: String,
}

/// A concession item from the catalog (`GET /api/food/items`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: FoodItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "flix_core::money::as_major")]
    pub price: Money,
    #[serde(default)]
    pub calories: Option<i64>,
    #[serde(default)]
    pub allergens: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Acknowledgement of a password login: the backend has dispatched an OTP.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginAck {
    pub message: String,
}

/// Successful OTP verification; the session cookie is now established.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginConfirmation {
    pub message: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Masked<String>,
    pub phone_number: Masked<String>,
}

/// Registration payload (`POST /user/register`, multipart).
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    /// Optional profile photo: file name plus raw bytes.
    pub photo: Option<(String, Vec<u8>)>,
}

/// A registered customer as listed by the admin console.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub user_id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Masked<String>,
    #[serde(default)]
    pub phone_number: Masked<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminUserPage {
    pub users: Vec<AdminUser>,
    pub total: i64,
}

/// One row of the admin booking list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingRow {
    pub booking_reference: String,
    pub booking_time: String,
    pub user_name: String,
    pub user_email: Masked<String>,
    #[serde(with = "flix_core::money::as_major")]
    pub total_amount: Money,
    pub payment_status: String,
}

/// Spring-style page wrapper for the admin booking list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingPage {
    pub content: Vec<AdminBookingRow>,
    pub total_pages: i64,
    pub total_elements: i64,
    pub number: i64,
}

/// Full booking detail for the admin console
/// (`GET /admin/bookings/{reference}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingDetails {
    pub booking_reference: String,
    pub user_name: String,
    pub user_email: Masked<String>,
    pub booking_time: String,
    #[serde(default)]
    pub showtime: Option<AdminShowtimeInfo>,
    #[serde(default)]
    pub seats: Vec<AdminSeatInfo>,
    #[serde(default)]
    pub food_orders: Vec<AdminFoodOrderInfo>,
    #[serde(default)]
    pub payment: Option<AdminPaymentInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminShowtimeInfo {
    pub movie_id: i64,
    pub theatre_id: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSeatInfo {
    pub seat_number: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminFoodOrderInfo {
    pub name: String,
    pub quantity: u32,
    #[serde(with = "flix_core::money::as_major")]
    pub price_at_order: Money,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPaymentInfo {
    pub transaction_id: String,
    #[serde(with = "flix_core::money::as_major")]
    pub amount: Money,
    pub status: String,
}

/// One row of the now-playing listing (`GET /movies/now-playing`). The
/// upstream catalog fields ride in snake_case; the backend appends a
/// comma-joined `genres` string.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListing {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub original_language: String,
    /// Genre names joined with `", "`.
    #[serde(default)]
    pub genres: String,
}

/// Paged now-playing response, upstream page shape.
#[derive(Debug, Clone, Deserialize)]
pub struct NowPlayingPage {
    pub page: u32,
    pub results: Vec<MovieListing>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// A theatre near the user's coordinates (`GET /theatres/nearby`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theatre {
    #[serde(default)]
    pub id: Option<i64>,
    pub place_id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// One bookable slot for a movie at a theatre (`GET /showtimes`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowtimeSlot {
    pub theatre_id: String,
    pub movie_id: i64,
    pub date: String,
    pub time: String,
    pub seat_categories: Vec<SeatCategory>,
}

/// Seat tier with availability and per-seat price.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatCategory {
    #[serde(rename = "type")]
    pub kind: String,
    pub seats_available: u32,
    #[serde(with = "flix_core::money::as_major")]
    pub price: Money,
}

/// `{ "message": ... }` acknowledgement the account-maintenance endpoints
/// return on success.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionAck {
    pub message: String,
}

/// Profile update payload (`PUT /user/update`, multipart). Only the set
/// fields are sent; a phone number change must carry the emailed
/// verification code.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub verification_code: Option<String>,
    /// Replacement profile photo: file name plus raw bytes.
    pub photo: Option<(String, Vec<u8>)>,
}

/// Profit analytics over a date range (`GET /admin/profit`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSummary {
    #[serde(with = "flix_core::money::as_major")]
    pub total_ticket_sales: Money,
    #[serde(with = "flix_core::money::as_major")]
    pub total_food_sales: Money,
    #[serde(with = "flix_core::money::as_major")]
    pub total_profit: Money,
    pub monthly_trend: Vec<MonthlyProfit>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProfit {
    /// `"YYYY-MM"`.
    pub month: String,
    #[serde(with = "flix_core::money::as_major")]
    pub ticket_sales: Money,
    #[serde(with = "flix_core::money::as_major")]
    pub food_sales: Money,
}

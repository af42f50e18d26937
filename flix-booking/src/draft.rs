use flix_core::Money;
use serde::{Deserialize, Serialize};

/// Id of a concession item. The catalog serves numeric ids for upstream
/// items and string ids for fallback items, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FoodItemId {
    Number(i64),
    Text(String),
}

/// One concession line on a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLine {
    pub id: FoodItemId,
    pub name: String,
    #[serde(with = "flix_core::money::as_major")]
    pub price: Money,
    pub quantity: u32,
}

impl FoodLine {
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// Client-held, uncommitted selection of showtime, seats and food items.
/// Lives in page state during an attempt and transits the carry-over store
/// when a login detour interrupts the flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub movie_id: String,
    pub theater_id: String,
    pub date: String,
    pub showtime: String,
    pub category: String,
    pub seats: Vec<String>,
    pub food_items: Vec<FoodLine>,
    /// Ticket subtotal for the selected seats, before concessions.
    #[serde(with = "flix_core::money::as_major")]
    pub ticket_price: Money,
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Draft query missing or malformed: {0}")]
    Query(String),

    #[error("Invalid price value: {0}")]
    InvalidPrice(String),

    #[error("Invalid food selection: {0}")]
    InvalidFood(String),
}

/// Flattened query-string form of a draft. Every field rides as a string;
/// seats are comma-joined and food lines travel as an embedded JSON array,
/// matching the shape the booking-summary route has always carried.
#[derive(Debug, Serialize, Deserialize)]
struct DraftQuery {
    movie: String,
    theater: String,
    showtime: String,
    category: String,
    seats: String,
    price: String,
    date: String,
    food: String,
}

impl BookingDraft {
    /// Concessions subtotal: Σ(price × quantity).
    pub fn food_total(&self) -> Money {
        self.food_items.iter().map(FoodLine::line_total).sum()
    }

    /// Total submitted for order creation: ticket subtotal plus food,
    /// exact to two decimal places.
    pub fn total(&self) -> Money {
        self.ticket_price + self.food_total()
    }

    /// Seat ids joined with commas, the verification payload's shape.
    pub fn seats_csv(&self) -> String {
        self.seats.join(",")
    }

    /// Encode the draft as booking-summary query parameters.
    pub fn to_query(&self) -> Result<String, DraftError> {
        let query = DraftQuery {
            movie: self.movie_id.clone(),
            theater: self.theater_id.clone(),
            showtime: self.showtime.clone(),
            category: self.category.clone(),
            seats: self.seats_csv(),
            price: self.ticket_price.to_string(),
            date: self.date.clone(),
            food: serde_json::to_string(&self.food_items)
                .map_err(|e| DraftError::InvalidFood(e.to_string()))?,
        };
        serde_urlencoded::to_string(&query).map_err(|e| DraftError::Query(e.to_string()))
    }

    /// Decode a draft from booking-summary query parameters. Fails fast on
    /// missing fields or unparseable price/food values.
    pub fn from_query(query: &str) -> Result<Self, DraftError> {
        let query: DraftQuery =
            serde_urlencoded::from_str(query).map_err(|e| DraftError::Query(e.to_string()))?;

        let price: f64 = query
            .price
            .parse()
            .map_err(|_| DraftError::InvalidPrice(query.price.clone()))?;

        let food_items: Vec<FoodLine> = if query.food.is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&query.food).map_err(|e| DraftError::InvalidFood(e.to_string()))?
        };

        Ok(BookingDraft {
            movie_id: query.movie,
            theater_id: query.theater,
            date: query.date,
            showtime: query.showtime,
            category: query.category,
            seats: query
                .seats
                .split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            food_items,
            ticket_price: Money::from_major(price),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookingDraft {
        BookingDraft {
            movie_id: "1".to_string(),
            theater_id: "2".to_string(),
            date: "2026-09-01".to_string(),
            showtime: "7:30 PM".to_string(),
            category: "Premium".to_string(),
            seats: vec!["A1".to_string(), "A2".to_string()],
            food_items: vec![FoodLine {
                id: FoodItemId::Number(1),
                name: "Popcorn Combo".to_string(),
                price: Money::from_major(50.0),
                quantity: 2,
            }],
            ticket_price: Money::from_major(300.0),
        }
    }

    #[test]
    fn total_adds_ticket_and_food_lines() {
        assert_eq!(draft().total().to_string(), "400.00");
    }

    #[test]
    fn total_with_no_food_is_the_ticket_subtotal() {
        let mut d = draft();
        d.food_items.clear();
        assert_eq!(d.total().to_string(), "300.00");
    }

    #[test]
    fn query_roundtrip_preserves_every_field() {
        let original = draft();
        let query = original.to_query().unwrap();
        let decoded = BookingDraft::from_query(&query).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn query_roundtrip_without_food() {
        let mut original = draft();
        original.food_items.clear();
        let decoded = BookingDraft::from_query(&original.to_query().unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn seats_are_comma_joined() {
        assert_eq!(draft().seats_csv(), "A1,A2");
    }

    #[test]
    fn malformed_price_is_a_typed_error() {
        let err = BookingDraft::from_query(
            "movie=1&theater=2&showtime=x&category=y&seats=A1&price=abc&date=d&food=",
        )
        .unwrap_err();
        assert!(matches!(err, DraftError::InvalidPrice(_)));
    }

    #[test]
    fn missing_field_is_a_typed_error() {
        let err = BookingDraft::from_query("movie=1").unwrap_err();
        assert!(matches!(err, DraftError::Query(_)));
    }
}

use crate::draft::BookingDraft;
use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key the in-progress draft is parked under during a login detour.
pub const PENDING_DRAFT_KEY: &str = "pendingBooking";

/// Typed key-value store standing in for browser-local storage. The
/// carry-over is best-effort and non-transactional: callers must tolerate
/// entries vanishing between `put` and `take`.
pub trait DraftStore: Send + Sync {
    fn put(&self, key: &str, value: String);

    /// Remove and return the entry, if any.
    fn take(&self, key: &str) -> Option<String>;

    /// Read without removing.
    fn peek(&self, key: &str) -> Option<String>;
}

/// HashMap-backed store used in tests and non-browser hosts.
#[derive(Default)]
pub struct InMemoryDraftStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for InMemoryDraftStore {
    fn put(&self, key: &str, value: String) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }

    fn take(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().remove(key)
    }

    fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

/// Serialize the draft under the well-known key before redirecting to login.
pub fn stash_draft(store: &dyn DraftStore, draft: &BookingDraft) {
    match serde_json::to_string(draft) {
        Ok(json) => store.put(PENDING_DRAFT_KEY, json),
        Err(e) => tracing::warn!("Failed to serialize pending draft: {}", e),
    }
}

/// Remove and decode the stashed draft after login completes. A missing or
/// corrupt entry yields `None`; the draft is simply lost, there is no
/// recovery path.
pub fn take_draft(store: &dyn DraftStore) -> Option<BookingDraft> {
    let json = store.take(PENDING_DRAFT_KEY)?;
    match serde_json::from_str(&json) {
        Ok(draft) => Some(draft),
        Err(e) => {
            tracing::warn!("Discarding unreadable pending draft: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{FoodItemId, FoodLine};
    use flix_core::Money;

    fn draft() -> BookingDraft {
        BookingDraft {
            movie_id: "1".to_string(),
            theater_id: "2".to_string(),
            date: "2026-09-01".to_string(),
            showtime: "7:30 PM".to_string(),
            category: "Premium".to_string(),
            seats: vec!["A1".to_string(), "A2".to_string()],
            food_items: vec![FoodLine {
                id: FoodItemId::Text("fallback-1".to_string()),
                name: "Nachos".to_string(),
                price: Money::from_major(300.0),
                quantity: 1,
            }],
            ticket_price: Money::from_major(300.0),
        }
    }

    #[test]
    fn stash_and_take_roundtrips_the_draft() {
        let store = InMemoryDraftStore::new();
        let original = draft();

        stash_draft(&store, &original);
        assert!(store.peek(PENDING_DRAFT_KEY).is_some());

        let restored = take_draft(&store).unwrap();
        assert_eq!(restored, original);
        // take removes the entry; a second read finds nothing.
        assert!(take_draft(&store).is_none());
    }

    #[test]
    fn corrupt_entry_is_discarded_silently() {
        let store = InMemoryDraftStore::new();
        store.put(PENDING_DRAFT_KEY, "not json".to_string());
        assert!(take_draft(&store).is_none());
        assert!(store.peek(PENDING_DRAFT_KEY).is_none());
    }

    #[test]
    fn empty_store_yields_none() {
        let store = InMemoryDraftStore::new();
        assert!(take_draft(&store).is_none());
    }
}

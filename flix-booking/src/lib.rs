pub mod carryover;
pub mod draft;
pub mod flow;
pub mod orchestrator;
pub mod routes;

pub use carryover::{DraftStore, InMemoryDraftStore};
pub use draft::{BookingDraft, FoodLine};
pub use flow::{CheckoutFlow, CheckoutState};
pub use orchestrator::{CheckoutError, CheckoutOrchestrator, CheckoutResult};

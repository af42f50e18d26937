pub mod events;
pub mod pii;

pub use events::CheckoutEvent;
pub use pii::Masked;

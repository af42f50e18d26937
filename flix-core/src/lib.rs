pub mod api;
pub mod identity;
pub mod money;
pub mod payment;

pub use api::{ApiError, BackendApi};
pub use money::Money;

pub mod account;
pub mod admin;
pub mod bookings;
pub mod config;
pub mod food;
pub mod http;
pub mod models;
pub mod movies;
pub mod payments;
pub mod session;
pub mod theatres;

pub use config::ClientConfig;
pub use http::MovieflixClient;

pub mod auth;
pub mod config;
pub mod error;
pub mod strava;

pub use error::{Error, Result};

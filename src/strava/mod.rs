pub mod client;
pub mod report;
pub mod types;

pub use client::ActivitiesClient;
pub use types::Activity;

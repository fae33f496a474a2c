use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry from the athlete activities listing.
///
/// Strava returns many more fields; only the ones the report uses are
/// kept, all defaulted so a sparse payload still parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    /// Distance in meters.
    pub distance: f64,
    /// Moving time in seconds.
    pub moving_time: u64,
    #[serde(default)]
    pub elapsed_time: u64,
    #[serde(default)]
    pub total_elevation_gain: f64,
    #[serde(default)]
    pub sport_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
}

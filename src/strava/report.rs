use super::types::Activity;

const METERS_PER_MILE: f64 = 1609.34;

/// Column names of the tabulated activity fields, in output order.
const COLUMNS: [&str; 8] = [
    "id",
    "name",
    "distance",
    "moving_time",
    "elapsed_time",
    "total_elevation_gain",
    "sport_type",
    "start_date",
];

/// Format one activity as a human-readable summary line.
pub fn summary_line(activity: &Activity) -> String {
    let miles = activity.distance / METERS_PER_MILE;
    let minutes = activity.moving_time as f64 / 60.0;
    format!("{}: {:.2} miles, {:.1} minutes", activity.name, miles, minutes)
}

/// Render the full report: one summary line per activity, the tabulated
/// column names, and the total count.
pub fn render(activities: &[Activity]) -> String {
    let mut out = String::new();

    for activity in activities {
        out.push_str(&summary_line(activity));
        out.push('\n');
    }

    out.push_str(&format!("Columns: {}\n", COLUMNS.join(", ")));
    out.push_str(&format!("\nTotal activities fetched: {}\n", activities.len()));
    out
}

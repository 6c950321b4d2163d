use chrono::NaiveDateTime;

/// Coarse age such as `3d 4h ago`; future timestamps read as `just now`.
pub fn format_age(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let duration = now.signed_duration_since(then);

    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;

    if days > 0 {
        format!("{}d {}h ago", days, hours)
    } else if hours > 0 {
        format!("{}h {}m ago", hours, minutes)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

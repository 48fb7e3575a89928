//! Short offset labels (`GMT`, `GMT+5:30`, `GMT-8`).

use once_cell::sync::Lazy;
use regex::Regex;

static OFFSET_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-])(\d{1,2})(?::?(\d{2}))?").expect("offset token pattern is valid")
});

/// Format an offset given in seconds east of UTC.
///
/// Zero renders as plain `GMT`; minutes are shown only when non-zero and
/// sub-minute seconds are dropped.
pub fn format_offset_label(offset_seconds: i32) -> String {
    if offset_seconds == 0 {
        return "GMT".to_string();
    }

    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let total = offset_seconds.unsigned_abs();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;

    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}

/// Extract signed fractional hours from an offset label.
///
/// Labels without a `+`/`-` token (`GMT`, `UTC`, garbage) yield `0.0`.
pub fn parse_offset_label(label: &str) -> f64 {
    let Some(caps) = OFFSET_TOKEN.captures(label) else {
        return 0.0;
    };

    let sign = if &caps[1] == "-" { -1.0 } else { 1.0 };
    let hours: f64 = caps[2].parse().unwrap_or(0.0);
    let minutes: f64 = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0);

    sign * (hours + minutes / 60.0)
}

//! Offset-keyed positional palette.

use tz_common::{HourBucket, MIN_OFFSET};

use crate::color::Color;

/// One color per whole-hour offset, `(offset, color)` from -12 to +14.
pub const OFFSET_COLORS: [(i32, Color); 27] = [
    (-12, Color::from_static("#7e6b8a")),
    (-11, Color::from_static("#6aa0ff")),
    (-10, Color::from_static("#50c2f8")),
    (-9, Color::from_static("#7bd1b9")),
    (-8, Color::from_static("#7ed957")),
    (-7, Color::from_static("#c3de4a")),
    (-6, Color::from_static("#ffd166")),
    (-5, Color::from_static("#f4a261")),
    (-4, Color::from_static("#f28482")),
    (-3, Color::from_static("#e07a5f")),
    (-2, Color::from_static("#d977a8")),
    (-1, Color::from_static("#b38add")),
    (0, Color::from_static("#8ab4f8")),
    (1, Color::from_static("#5ec8e5")),
    (2, Color::from_static("#4fd1c5")),
    (3, Color::from_static("#4ade80")),
    (4, Color::from_static("#a3e635")),
    (5, Color::from_static("#facc15")),
    (6, Color::from_static("#f59e0b")),
    (7, Color::from_static("#fb7185")),
    (8, Color::from_static("#f472b6")),
    (9, Color::from_static("#c084fc")),
    (10, Color::from_static("#a78bfa")),
    (11, Color::from_static("#93c5fd")),
    (12, Color::from_static("#60a5fa")),
    (13, Color::from_static("#38bdf8")),
    (14, Color::from_static("#22d3ee")),
];

const UTC_COLOR: Color = OFFSET_COLORS[(0 - MIN_OFFSET) as usize].1;

/// Color for a UTC offset in hours. The offset is rounded to the nearest
/// whole hour and clamped to -12..=14 first.
pub fn color_for_offset(offset: f64) -> Color {
    color_for_bucket(HourBucket::from_offset(offset))
}

/// Color for an already-bucketed offset.
pub fn color_for_bucket(bucket: HourBucket) -> Color {
    OFFSET_COLORS
        .get(bucket.index())
        .filter(|(hour, _)| *hour == bucket.hour())
        .map(|(_, color)| *color)
        .unwrap_or(UTC_COLOR)
}

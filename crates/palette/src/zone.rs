//! String-keyed qualitative palette.

use crate::color::Color;
use crate::hash::djb2;

/// Qualitative palette for string-keyed coloring.
pub const ZONE_PALETTE: [Color; 8] = [
    Color::from_static("#3B82F6"),
    Color::from_static("#22D3EE"),
    Color::from_static("#A855F7"),
    Color::from_static("#EC4899"),
    Color::from_static("#10B981"),
    Color::from_static("#F59E0B"),
    Color::from_static("#6366F1"),
    Color::from_static("#F97316"),
];

/// Stable color for an arbitrary key.
pub fn color_for(key: &str) -> Color {
    ZONE_PALETTE[djb2(key) as usize % ZONE_PALETTE.len()]
}

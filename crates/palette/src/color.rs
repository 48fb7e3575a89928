//! Palette color values.

use serde::{Serialize, Serializer};
use std::fmt;

/// An RGB hex color from one of the fixed palettes.
///
/// Colors are compared and serialized as their hex string, preserving the
/// palette's original casing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    /// Wrap a `#rrggbb` literal.
    pub const fn from_static(hex: &'static str) -> Self {
        Color(hex)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.0.to_string()
    }
}

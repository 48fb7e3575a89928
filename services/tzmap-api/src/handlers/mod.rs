//! HTTP request handlers for the tzmap API.

pub mod bands;
pub mod colors;
pub mod common;
pub mod health;
pub mod style;
pub mod timezones;

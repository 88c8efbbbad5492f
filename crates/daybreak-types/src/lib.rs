//! Shared domain types for the Daybreak project.

pub mod config;
pub mod geometry;
pub mod image;
pub mod metadata;

mod errors;

pub use errors::{DaybreakError, Result};

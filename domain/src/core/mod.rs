//! Core helpers shared across all subdomains.
//!
//! - [`string`] — presence, masking and region-shape checks for configuration strings

pub mod string;

//! Utility functions for slug generation, URL processing, and error handling.
//!
//! - [`slug`] - Title to slug normalization and slug shape checks
//! - [`url_normalizer`] - Target URL normalization at resolution time
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod slug;
pub mod url_normalizer;

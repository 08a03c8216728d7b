//! Output formatting for subnet data.
//!
//! This module handles rendering calculation results:
//! - [`json`] - JSON payloads for records and errors

mod json;

pub use json::{render_error, render_record};

//! Domain models for subnet calculations.
//!
//! This module contains the core data structures used throughout the application:
//! - [`ipv4`] - IPv4 parsing and prefix arithmetic
//! - [`classify`] - legacy class and private/public classification
//! - [`SubnetRecord`] - the derived subnet summary

mod classify;
mod ipv4;
mod record;

// Re-export public types
pub use classify::{ip_class, ip_type, IpClass, IpType};
pub use ipv4::{
    broadcast_addr, host_range, network_addr, parse_addr, prefix_mask, to_binary_string,
    total_hosts, MAX_PREFIX,
};
pub use record::SubnetRecord;

//! Subnet calculation and planning logic.
//!
//! This module contains the business logic built on the models:
//! - [`report`] - deriving the full summary for one address/prefix pair
//! - [`ipam`] - planning host allocations against a subnet's capacity

mod ipam;
mod report;

// Re-export public functions
pub use ipam::{plan_capacity, Allocation, HostPlan, PlanError};
pub use report::calculate_subnet;

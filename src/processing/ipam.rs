//! Host capacity planning for a managed subnet.
//!
//! Tracks named allocations against the usable host budget of one
//! subnet, refusing requests the remaining capacity cannot cover.

use std::fmt;
use std::net::Ipv4Addr;

use thiserror::Error;

use crate::models::{parse_addr, MAX_PREFIX};

/// Errors raised while planning host allocations.
///
/// As with [`crate::error::SubnetError`], the display strings are the
/// user facing message text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// The subnet text is not `x.x.x.x/y` with a valid address and prefix.
    #[error("Invalid Subnet format. Please use x.x.x.x/y format.")]
    InvalidSubnetFormat,
    /// Blank department name or a zero host count.
    #[error("Please enter a valid department name and number of hosts.")]
    InvalidRequest,
    /// The request exceeds what is left of the host budget.
    #[error("Allocation failed. Only {remaining} hosts are available.")]
    Exhausted { remaining: u64 },
}

/// One accepted allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub department: String,
    pub count: u64,
}

/// Usable host count for planning purposes.
///
/// The planner takes the conservative view: /31 and /32 subnets (and
/// the /0 default route) have no plannable hosts, everything else has
/// its address count minus the network and broadcast addresses.
pub fn plan_capacity(prefix: u8) -> u64 {
    if prefix == 0 || prefix > 30 {
        return 0;
    }
    (1u64 << (MAX_PREFIX - prefix)) - 2
}

/// A subnet's host budget and the allocations made against it.
#[derive(Debug, Clone)]
pub struct HostPlan {
    subnet: Ipv4Addr,
    prefix: u8,
    total_usable: u64,
    allocations: Vec<Allocation>,
}

impl HostPlan {
    /// Start a plan for a subnet given as `x.x.x.x/y` text.
    pub fn new(cidr_text: &str) -> Result<HostPlan, PlanError> {
        let parts: Vec<&str> = cidr_text.trim().split('/').collect();
        if parts.len() != 2 {
            return Err(PlanError::InvalidSubnetFormat);
        }
        let subnet = parse_addr(parts[0]).map_err(|_| PlanError::InvalidSubnetFormat)?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| PlanError::InvalidSubnetFormat)?;
        if prefix > MAX_PREFIX {
            return Err(PlanError::InvalidSubnetFormat);
        }
        Ok(HostPlan {
            subnet,
            prefix,
            total_usable: plan_capacity(prefix),
            allocations: Vec::new(),
        })
    }

    /// Reserve `count` hosts for a department.
    ///
    /// A request for exactly the remaining capacity succeeds; one host
    /// more is refused and the ledger is left untouched.
    pub fn allocate(&mut self, department: &str, count: u64) -> Result<(), PlanError> {
        let department = department.trim();
        if department.is_empty() || count == 0 {
            return Err(PlanError::InvalidRequest);
        }
        let remaining = self.remaining();
        if count > remaining {
            log::warn!(
                "refused {count} hosts for {department}, only {remaining} remaining in {self}"
            );
            return Err(PlanError::Exhausted { remaining });
        }
        self.allocations.push(Allocation {
            department: department.to_string(),
            count,
        });
        log::debug!("allocated {count} hosts to {department} in {self}");
        Ok(())
    }

    /// Usable hosts in the subnet.
    pub fn total_usable(&self) -> u64 {
        self.total_usable
    }

    /// Hosts handed out so far.
    pub fn allocated(&self) -> u64 {
        self.allocations.iter().map(|alloc| alloc.count).sum()
    }

    /// Hosts still available.
    pub fn remaining(&self) -> u64 {
        self.total_usable - self.allocated()
    }

    /// The accepted allocations, oldest first.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }
}

impl fmt::Display for HostPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}/{} hosts allocated)",
            self.subnet,
            self.prefix,
            self.allocated(),
            self.total_usable
        )
    }
}

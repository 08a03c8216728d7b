//! Derives the full subnet summary for one address/prefix pair.

use crate::error::SubnetError;
use crate::models::{
    broadcast_addr, host_range, ip_class, ip_type, network_addr, parse_addr, prefix_mask,
    to_binary_string, total_hosts, SubnetRecord,
};

/// Calculate every derived property of `address`/`prefix`.
///
/// # Arguments
///
/// * `address` - dotted-decimal IPv4 address text, e.g. `"192.168.1.10"`
/// * `prefix` - CIDR prefix length, 0..=32
///
/// # Returns
///
/// A fully populated [`SubnetRecord`], or the first validation error.
/// The address is checked before the prefix.
pub fn calculate_subnet(address: &str, prefix: u8) -> Result<SubnetRecord, SubnetError> {
    // Validate both inputs before deriving anything.
    let addr = parse_addr(address)?;
    let mask = prefix_mask(prefix)?;

    let network = network_addr(addr, mask);
    let broadcast = broadcast_addr(network, mask);
    let (first_host, last_host, usable_hosts) = host_range(network, broadcast, prefix)?;

    let record = SubnetRecord {
        network_address: network,
        broadcast_address: broadcast,
        first_host,
        last_host,
        subnet_mask: mask,
        total_hosts: total_hosts(prefix)?,
        usable_hosts,
        ip_class: ip_class(addr),
        ip_type: ip_type(addr),
        ip_binary: to_binary_string(addr),
        mask_binary: to_binary_string(mask),
    };
    log::debug!(
        "calculated {address}/{prefix}: network {}, {} usable hosts",
        record.network_address,
        record.usable_hosts
    );
    Ok(record)
}

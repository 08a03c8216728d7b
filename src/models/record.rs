//! The derived subnet summary record.

use std::net::Ipv4Addr;

use serde::ser::SerializeStruct;
use serde::Serialize;

use crate::models::classify::{IpClass, IpType};

/// Everything derived from one address/prefix pair.
///
/// Built once by [`crate::processing::calculate_subnet`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetRecord {
    /// Address with the host bits cleared.
    pub network_address: Ipv4Addr,
    /// Address with the host bits set.
    pub broadcast_address: Ipv4Addr,
    /// First usable host, `None` for a /32 host route.
    pub first_host: Option<Ipv4Addr>,
    /// Last usable host, `None` for a /32 host route.
    pub last_host: Option<Ipv4Addr>,
    /// Dotted-decimal mask for the prefix.
    pub subnet_mask: Ipv4Addr,
    /// Every address in the subnet, usable or not.
    pub total_hosts: u64,
    /// Addresses assignable to hosts.
    pub usable_hosts: u64,
    /// Legacy first-octet class.
    pub ip_class: IpClass,
    /// RFC 1918 private or public.
    pub ip_type: IpType,
    /// Binary rendering of the queried address.
    pub ip_binary: String,
    /// Binary rendering of the mask.
    pub mask_binary: String,
}

fn host_text(host: Option<Ipv4Addr>) -> String {
    match host {
        Some(addr) => addr.to_string(),
        None => "N/A".to_string(),
    }
}

// Serialized by hand so the payload keeps its published field order and
// renders absent hosts and the unclassified class as the string "N/A".
impl Serialize for SubnetRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut state = serializer.serialize_struct("SubnetRecord", 11)?;
        state.serialize_field("network_address", &self.network_address.to_string())?;
        state.serialize_field("broadcast_address", &self.broadcast_address.to_string())?;
        state.serialize_field("first_host", &host_text(self.first_host))?;
        state.serialize_field("last_host", &host_text(self.last_host))?;
        state.serialize_field("subnet_mask", &self.subnet_mask.to_string())?;
        state.serialize_field("total_hosts", &self.total_hosts)?;
        state.serialize_field("usable_hosts", &self.usable_hosts)?;
        state.serialize_field("ip_class", &self.ip_class.to_string())?;
        state.serialize_field("ip_type", &self.ip_type.to_string())?;
        state.serialize_field("ip_binary", &self.ip_binary)?;
        state.serialize_field("mask_binary", &self.mask_binary)?;
        state.end()
    }
}

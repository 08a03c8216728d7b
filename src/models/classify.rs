//! Legacy class and address scope classification.

use std::fmt;
use std::net::Ipv4Addr;

/// Legacy (pre-CIDR) address class, decided by the first octet.
///
/// Addresses starting with 0 or 127 sit outside the historical A-E
/// table and are reported as [`IpClass::Unclassified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
    Unclassified,
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D",
            IpClass::E => "E",
            IpClass::Unclassified => "N/A",
        };
        write!(f, "{text}")
    }
}

/// Whether an address falls in the RFC 1918 private ranges.
///
/// Everything outside those three blocks is reported as `Public`,
/// including loopback, link-local and multicast addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpType {
    Private,
    Public,
}

impl fmt::Display for IpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IpType::Private => "Private",
            IpType::Public => "Public",
        };
        write!(f, "{text}")
    }
}

/// Classify an address into the legacy A-E table.
pub fn ip_class(addr: Ipv4Addr) -> IpClass {
    match addr.octets()[0] {
        1..=126 => IpClass::A,
        128..=191 => IpClass::B,
        192..=223 => IpClass::C,
        224..=239 => IpClass::D,
        240..=255 => IpClass::E,
        // 0 and 127
        _ => IpClass::Unclassified,
    }
}

/// Report whether an address is RFC 1918 private or public.
pub fn ip_type(addr: Ipv4Addr) -> IpType {
    let [o1, o2, _, _] = addr.octets();
    let private = o1 == 10 || (o1 == 172 && (16..=31).contains(&o2)) || (o1 == 192 && o2 == 168);
    if private {
        IpType::Private
    } else {
        IpType::Public
    }
}

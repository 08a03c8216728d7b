//! IPv4 address and prefix arithmetic.
//!
//! All of the math happens on `u32` values obtained with `u32::from()`,
//! converted back to [`std::net::Ipv4Addr`] at the edges.

use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::SubnetError;

/// Number of bits in an IPv4 address, and the largest valid prefix length.
pub const MAX_PREFIX: u8 = 32;

/// Parse dotted-decimal text into an [`Ipv4Addr`].
///
/// The parse is strict: exactly four octets, each 0..=255, no whitespace
/// and no leading zeros. Anything else is [`SubnetError::InvalidFormat`].
pub fn parse_addr(text: &str) -> Result<Ipv4Addr, SubnetError> {
    Ipv4Addr::from_str(text).map_err(|_| SubnetError::InvalidFormat)
}

/// Build the subnet mask for a prefix length.
///
/// The mask is (prefix) one bits followed by (32 - prefix) zero bits.
/// Widening to `u64` first lets the same shift expression handle /0,
/// where a 32-bit shift would overflow.
///
/// # Arguments
///
/// * `prefix` - prefix length, 0..=32
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_calculator::models::prefix_mask;
///
/// assert_eq!(prefix_mask(24), Ok(Ipv4Addr::new(255, 255, 255, 0)));
/// assert_eq!(prefix_mask(0), Ok(Ipv4Addr::new(0, 0, 0, 0)));
/// ```
pub fn prefix_mask(prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    if prefix > MAX_PREFIX {
        return Err(SubnetError::InvalidPrefix);
    }
    let right_len = MAX_PREFIX - prefix;
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;
    Ok(Ipv4Addr::from(mask as u32))
}

/// Network address: the host address with the host bits cleared.
pub fn network_addr(addr: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & u32::from(mask))
}

/// Broadcast address: the network address with the host bits set.
pub fn broadcast_addr(network: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(network) | !u32::from(mask))
}

/// Total number of addresses in a subnet, usable or not.
///
/// Computed as a 64-bit shift because /0 spans all 2^32 addresses.
pub fn total_hosts(prefix: u8) -> Result<u64, SubnetError> {
    if prefix > MAX_PREFIX {
        return Err(SubnetError::InvalidPrefix);
    }
    Ok(1u64 << (MAX_PREFIX - prefix))
}

/// The usable host addresses of a subnet.
///
/// Returns the first usable host, the last usable host and the usable
/// host count. Conventional subnets reserve the network and broadcast
/// addresses, /31 point-to-point links use both addresses as hosts
/// (RFC 3021), and a /32 host route has no usable range at all.
///
/// # Returns
///
/// `(first_host, last_host, usable_count)` where the hosts are `None`
/// for a /32.
pub fn host_range(
    network: Ipv4Addr,
    broadcast: Ipv4Addr,
    prefix: u8,
) -> Result<(Option<Ipv4Addr>, Option<Ipv4Addr>, u64), SubnetError> {
    match prefix {
        0..=30 => {
            let first = Ipv4Addr::from(u32::from(network) + 1);
            let last = Ipv4Addr::from(u32::from(broadcast) - 1);
            let usable = total_hosts(prefix)? - 2;
            Ok((Some(first), Some(last), usable))
        }
        31 => Ok((Some(network), Some(broadcast), 2)),
        32 => Ok((None, None, 0)),
        _ => Err(SubnetError::InvalidPrefix),
    }
}

/// Dotted binary rendition of an address, one byte per group.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_calculator::models::to_binary_string;
///
/// let text = to_binary_string(Ipv4Addr::new(192, 168, 1, 10));
/// assert_eq!(text, "11000000.10101000.00000001.00001010");
/// ```
pub fn to_binary_string(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

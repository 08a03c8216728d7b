//! Error types for subnet calculations.

use thiserror::Error;

/// Errors returned when an address or prefix cannot be turned into a subnet.
///
/// The display strings double as the user facing error text, so keep them
/// readable for someone typing at a shell.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubnetError {
    /// The address text is not a valid dotted-decimal IPv4 address.
    #[error("Invalid IP address format.")]
    InvalidFormat,
    /// The prefix length is outside 0..=32.
    #[error("Invalid CIDR prefix. Please provide a value between 0 and 32.")]
    InvalidPrefix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubnetError::InvalidFormat.to_string(),
            "Invalid IP address format.",
            "address error text should match the user facing message"
        );
        assert_eq!(
            SubnetError::InvalidPrefix.to_string(),
            "Invalid CIDR prefix. Please provide a value between 0 and 32.",
            "prefix error text should match the user facing message"
        );
    }
}

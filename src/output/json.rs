//! JSON payload formatting for subnet records.

use std::error::Error;

use crate::error::SubnetError;
use crate::models::SubnetRecord;

/// Render a record as the pretty-printed JSON payload.
///
/// # Arguments
/// * `record` - The subnet record to render
///
/// # Returns
/// The payload text, fields in their published order.
pub fn render_record(record: &SubnetRecord) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(record)
        .map_err(|e| format!("Error serializing record: {e}").into())
}

/// Render a calculation error as a one-field JSON payload.
pub fn render_error(error: &SubnetError) -> String {
    serde_json::json!({ "error": error.to_string() }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::calculate_subnet;

    #[test]
    fn test_render_record_values() {
        let record = calculate_subnet("192.168.1.10", 24).unwrap();
        let text = render_record(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["network_address"], "192.168.1.0");
        assert_eq!(value["broadcast_address"], "192.168.1.255");
        assert_eq!(value["first_host"], "192.168.1.1");
        assert_eq!(value["last_host"], "192.168.1.254");
        assert_eq!(value["subnet_mask"], "255.255.255.0");
        assert_eq!(value["total_hosts"], 256);
        assert_eq!(value["usable_hosts"], 254);
        assert_eq!(value["ip_class"], "C");
        assert_eq!(value["ip_type"], "Private");
        assert_eq!(value["ip_binary"], "11000000.10101000.00000001.00001010");
        assert_eq!(value["mask_binary"], "11111111.11111111.11111111.00000000");
    }

    #[test]
    fn test_render_record_field_order() {
        let record = calculate_subnet("10.1.2.3", 16).unwrap();
        let text = render_record(&record).unwrap();
        let fields = [
            "network_address",
            "broadcast_address",
            "first_host",
            "last_host",
            "subnet_mask",
            "total_hosts",
            "usable_hosts",
            "ip_class",
            "ip_type",
            "ip_binary",
            "mask_binary",
        ];
        let mut last_pos = 0;
        for field in fields {
            let needle = format!("\"{field}\"");
            let pos = text
                .find(&needle)
                .unwrap_or_else(|| panic!("{field} missing from payload"));
            assert!(pos > last_pos, "{field} out of order in payload");
            last_pos = pos;
        }
    }

    #[test]
    fn test_render_record_host_route() {
        let record = calculate_subnet("8.8.8.8", 32).unwrap();
        let text = render_record(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["first_host"], "N/A");
        assert_eq!(value["last_host"], "N/A");
        assert_eq!(value["total_hosts"], 1);
        assert_eq!(value["usable_hosts"], 0);
    }

    #[test]
    fn test_render_error_payload() {
        let text = render_error(&SubnetError::InvalidFormat);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["error"], "Invalid IP address format.");

        let text = render_error(&SubnetError::InvalidPrefix);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value["error"],
            "Invalid CIDR prefix. Please provide a value between 0 and 32."
        );
    }
}

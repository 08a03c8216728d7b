// cargo watch -x 'fmt' -x 'test'

mod error;
pub mod models;
pub mod output;
pub mod processing;

// Re-export the entry points callers need
pub use error::SubnetError;
pub use models::SubnetRecord;
pub use processing::calculate_subnet;

pub mod client;
pub mod error;
pub mod types;

pub use client::SupplierClient;
pub use error::ClientError;

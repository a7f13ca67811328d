//! Adapter implementations of the user directory port.

pub mod http;
pub mod memory;

pub use http::HttpUserDirectory;
pub use memory::InMemoryUserDirectory;

//! REST-backed task store adapter.

pub mod models;

mod store;

pub use models::{RecordDecodeError, TaskRecord};
pub use store::{HttpTaskStore, HttpTaskStoreConfig};

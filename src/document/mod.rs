pub mod query_document;
pub use query_document::*;

pub mod sidecar;
pub use sidecar::*;

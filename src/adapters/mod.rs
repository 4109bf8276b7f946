// Adapters layer: concrete implementations for external systems (scansion service, uploaded files).

pub mod http;
pub mod upload;

pub mod base_types;
pub mod config;
pub mod json_serialisation;
pub mod location;
pub mod network;
pub mod service_filter;
pub mod utilities;

/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod embedded;
pub mod filesystem;
pub mod formatters;

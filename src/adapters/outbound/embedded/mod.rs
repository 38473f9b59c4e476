/// Adapter serving the dataset compiled into the binary
mod embedded_payload;

pub use embedded_payload::EmbeddedPayloadReader;

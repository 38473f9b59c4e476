/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world (file system,
/// console, output destinations) through these traits.
pub mod outbound;

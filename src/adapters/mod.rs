/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with files, the terminal and the
/// compiled-in dataset.
pub mod outbound;

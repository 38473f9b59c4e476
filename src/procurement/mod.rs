/// Procurement domain - PNCP opportunity records and the rules applied to them
///
/// Pure logic with no I/O: the types describing a tender notice, the payload
/// loader, the integrity checker and the screening services.
pub mod domain;
pub mod policies;
pub mod services;

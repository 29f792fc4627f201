//! Host collaborator interfaces

pub mod clock;
pub mod settings;

/// A host collaborator could not produce a value.
///
/// The face treats this as transient: it keeps the last-rendered
/// strings and tries again on the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Unavailable;

//! Pinned-application registry module
//!
//! Provides the ordered collection of dock entries with its uniqueness
//! invariant: no two entries share a bundle identifier or a launch target.

mod entry;
mod manager;

pub use entry::AppEntry;
pub use manager::AppRegistry;

/// Opaque icon handle minted by the bundle resolver
///
/// The engine stores and forwards handles without interpreting them;
/// only the presentation layer can turn one back into pixels.
pub type IconHandle = u64;

//! Hardware catalog module.
//!
//! Contains the hardware item types and the read-only provider boundary.

mod hardware;
mod provider;

pub use hardware::{HardwareCategory, HardwareItem};
pub use provider::{CatalogProvider, StaticCatalog};

//! Build configurator module.
//!
//! Contains the slot table, the selection state machine, compatibility
//! filtering, pricing and the session flow.

mod compat;
mod pricing;
mod selection;
mod session;
mod slots;

pub use compat::{filter_compatible, sort_by_price_ascending};
pub use pricing::{BuildPricing, SlotSubtotal};
pub use selection::{BuildSelection, ExtraLineItem, ExtraProduct, SlotEntry};
pub use session::{BuildSession, CatalogState, FetchTicket};
pub use slots::{slot_definition, SlotDefinition, SlotValue, SLOT_DEFINITIONS};

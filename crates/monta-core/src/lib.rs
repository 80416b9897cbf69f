//! Build-your-own-PC configurator core for the Monte Você Mesmo flow.
//!
//! This crate provides the domain logic behind the storefront's PC build
//! configurator:
//!
//! - **Catalog**: hardware items with compatibility attributes, behind a
//!   read-only provider boundary
//! - **Build**: slot table, selection state machine, compatibility
//!   filtering, pricing and the session flow
//! - **Quote**: immutable quote documents, cart hand-off, message rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use monta_core::prelude::*;
//! use std::sync::Arc;
//!
//! let mut session = BuildSession::new(provider, Currency::BRL);
//!
//! // Browse a category; items come back compatibility-filtered and
//! // sorted by ascending price.
//! session.open_category(HardwareCategory::Processor).await;
//! let cpu = session.compatible_items()[0].clone();
//! session.select(cpu);
//!
//! // ...fill the remaining required slots, then snapshot a quote.
//! let quote = session.generate_quote(SellerInfo::new("Ana", "Monta Hardware"))?;
//! println!("{}", format_message(quote));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod build;
pub mod catalog;
pub mod quote;

pub use error::BuilderError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::BuilderError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{CatalogProvider, HardwareCategory, HardwareItem, StaticCatalog};

    // Build
    pub use crate::build::{
        filter_compatible, slot_definition, sort_by_price_ascending, BuildPricing, BuildSelection,
        BuildSession, CatalogState, ExtraLineItem, ExtraProduct, FetchTicket, SlotDefinition,
        SlotEntry, SlotSubtotal, SlotValue, SLOT_DEFINITIONS,
    };

    // Quote
    pub use crate::quote::{
        format_message, push_to_cart, CartLine, CartSink, QuoteDocument, QuoteLine, SellerInfo,
        VALIDITY_DAYS,
    };
}

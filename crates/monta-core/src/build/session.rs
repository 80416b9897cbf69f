//! Configurator session: catalog browsing plus the build lifecycle.
//!
//! Single-threaded and UI-event-driven. Selection mutations are synchronous;
//! catalog fetches are the only async operations and go through fetch
//! tickets so that a superseded request's late result is discarded instead
//! of applied.

use crate::build::{filter_compatible, sort_by_price_ascending, BuildSelection, ExtraProduct};
use crate::catalog::{CatalogProvider, HardwareCategory, HardwareItem};
use crate::error::BuilderError;
use crate::ids::{ExtraKey, ItemId, ProductId};
use crate::money::Currency;
use crate::quote::{push_to_cart, CartSink, QuoteDocument, SellerInfo};
use std::sync::Arc;

/// State of the active category's catalog view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogState {
    /// No category opened yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Items loaded. An empty filtered list is still `Loaded`.
    Loaded,
    /// Fetch failed; the view is empty but selections are untouched.
    Failed(String),
}

/// Token tying a fetch result back to the request that started it.
///
/// A later `begin_open` invalidates all earlier tickets, which is how a
/// stale response for a no-longer-active category gets dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    category: HardwareCategory,
    seq: u64,
}

/// One user's configurator session.
///
/// Owns the in-progress selection and the last generated quote. The catalog
/// provider and any cart sink are injected; the session never reaches out
/// to ambient singletons.
pub struct BuildSession {
    provider: Arc<dyn CatalogProvider>,
    selection: BuildSelection,
    active_category: Option<HardwareCategory>,
    catalog_state: CatalogState,
    catalog_items: Vec<HardwareItem>,
    fetch_seq: u64,
    quote: Option<QuoteDocument>,
}

impl BuildSession {
    /// Create a session with an empty selection.
    pub fn new(provider: Arc<dyn CatalogProvider>, currency: Currency) -> Self {
        Self {
            provider,
            selection: BuildSelection::new(currency),
            active_category: None,
            catalog_state: CatalogState::Idle,
            catalog_items: Vec::new(),
            fetch_seq: 0,
            quote: None,
        }
    }

    /// The in-progress selection.
    pub fn selection(&self) -> &BuildSelection {
        &self.selection
    }

    /// The currently active category, if any.
    pub fn active_category(&self) -> Option<HardwareCategory> {
        self.active_category
    }

    /// State of the active category's catalog view.
    pub fn catalog_state(&self) -> &CatalogState {
        &self.catalog_state
    }

    /// Mark a category active and start a fetch for it.
    ///
    /// Returns the ticket the eventual result must be applied with. The
    /// previous view is cleared immediately.
    pub fn begin_open(&mut self, category: HardwareCategory) -> FetchTicket {
        self.fetch_seq += 1;
        self.active_category = Some(category);
        self.catalog_state = CatalogState::Loading;
        self.catalog_items.clear();
        FetchTicket {
            category,
            seq: self.fetch_seq,
        }
    }

    /// Apply a completed fetch, unless a later `begin_open` superseded it.
    ///
    /// Returns whether the result was applied. A failed fetch leaves the
    /// item list empty and never touches existing selections.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<HardwareItem>, BuilderError>,
    ) -> bool {
        if ticket.seq != self.fetch_seq {
            tracing::debug!(
                category = ticket.category.as_str(),
                "discarding stale catalog fetch"
            );
            return false;
        }
        match result {
            Ok(items) => {
                self.catalog_items = items;
                self.catalog_state = CatalogState::Loaded;
            }
            Err(err) => {
                tracing::warn!(
                    category = ticket.category.as_str(),
                    error = %err,
                    "catalog fetch failed"
                );
                self.catalog_items.clear();
                self.catalog_state = CatalogState::Failed(err.to_string());
            }
        }
        true
    }

    /// Open a category: begin a fetch, await the provider, apply the result.
    pub async fn open_category(&mut self, category: HardwareCategory) -> &CatalogState {
        let ticket = self.begin_open(category);
        let result = self.provider.list_by_category(category).await;
        self.apply_fetch(ticket, result);
        &self.catalog_state
    }

    /// The active category's items, compatibility-filtered against the
    /// current selection and stably sorted by ascending price.
    ///
    /// Empty while no category is open, while loading, or after a failed
    /// fetch; also empty when nothing compatible exists, which is a valid
    /// displayable state rather than an error.
    pub fn compatible_items(&self) -> Vec<HardwareItem> {
        let Some(category) = self.active_category else {
            return Vec::new();
        };
        let mut items = filter_compatible(&self.catalog_items, category, &self.selection);
        sort_by_price_ascending(&mut items);
        items
    }

    /// Select an item into its slot.
    pub fn select(&mut self, item: HardwareItem) {
        self.selection.select(item);
    }

    /// Remove one occurrence of an item from a slot.
    pub fn remove_one(&mut self, category: HardwareCategory, item_id: &ItemId) -> bool {
        self.selection.remove_one(category, item_id)
    }

    /// Empty a slot.
    pub fn clear(&mut self, category: HardwareCategory) {
        self.selection.clear(category);
    }

    /// Add an extra product line item.
    pub fn add_extra(&mut self, product: ExtraProduct) -> ExtraKey {
        self.selection.add_extra(product)
    }

    /// Remove the first extra line item matching a product id.
    pub fn remove_one_extra(&mut self, product_id: &ProductId) -> bool {
        self.selection.remove_one_extra(product_id)
    }

    /// Generate a quote from the current selection, dated today.
    ///
    /// Replaces any previously generated quote. On validation failure the
    /// selection and the previous quote are left untouched.
    pub fn generate_quote(&mut self, seller: SellerInfo) -> Result<&QuoteDocument, BuilderError> {
        let document = QuoteDocument::build_today(&self.selection, seller)?;
        tracing::debug!(
            quote_id = document.id.as_str(),
            total = document.grand_total.amount_cents,
            "quote generated"
        );
        Ok(self.quote.insert(document))
    }

    /// The last generated quote, if any.
    pub fn quote(&self) -> Option<&QuoteDocument> {
        self.quote.as_ref()
    }

    /// Hand the last generated quote's rows to a cart sink.
    ///
    /// Returns whether a quote existed to hand off. The sink is injected
    /// per call; the core never awaits downstream confirmation.
    pub fn push_quote_to_cart(&self, sink: &mut dyn CartSink) -> bool {
        match &self.quote {
            Some(document) => {
                push_to_cart(document, sink);
                true
            }
            None => false,
        }
    }
}

//! Selection state machine for an in-progress build.

use crate::build::slots::{SlotDefinition, SlotValue, SLOT_DEFINITIONS};
use crate::catalog::{HardwareCategory, HardwareItem};
use crate::error::BuilderError;
use crate::ids::{ExtraKey, ItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A non-hardware store product offered as a build addition.
///
/// The category label is required and validated at ingestion; the catalog
/// boundary is the one place that decides what happens when it is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraProduct {
    /// Store product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Category display label (e.g., "Periféricos").
    pub category_label: String,
    /// Unit price.
    pub price: Money,
}

impl ExtraProduct {
    /// Create an extra product, rejecting blank title or category.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        category_label: impl Into<String>,
        price: Money,
    ) -> Result<Self, BuilderError> {
        let title = title.into();
        let category_label = category_label.into();
        if title.trim().is_empty() {
            return Err(BuilderError::InvalidExtra("blank title".to_string()));
        }
        if category_label.trim().is_empty() {
            return Err(BuilderError::InvalidExtra(
                "blank category label".to_string(),
            ));
        }
        if price.is_negative() {
            return Err(BuilderError::InvalidExtra("negative price".to_string()));
        }
        Ok(Self {
            id: id.into(),
            title,
            category_label,
            price,
        })
    }
}

/// One addition of an extra product to the build.
///
/// The same product added twice yields two line items with distinct keys,
/// not a quantity increment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraLineItem {
    /// Per-session sequence key distinguishing repeated additions.
    pub key: ExtraKey,
    /// Snapshotted product data.
    pub product: ExtraProduct,
}

/// One slot of the build: its static definition plus current contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotEntry {
    /// Static definition.
    pub definition: SlotDefinition,
    /// Current contents; variant shape always matches the definition.
    pub value: SlotValue,
}

/// The in-progress build.
///
/// In-memory only; created empty on configurator entry and discarded on
/// navigation away (Serialize is for debugging/snapshots, there is no
/// draft-save). All operations are synchronous and atomic with respect to
/// the single owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildSelection {
    /// One entry per slot, in declaration order.
    slots: Vec<SlotEntry>,
    /// Extra line items, in insertion order.
    extras: Vec<ExtraLineItem>,
    /// Next extra-key sequence value.
    next_extra_key: u64,
    /// Session currency.
    pub currency: Currency,
}

impl BuildSelection {
    /// Create an empty selection in the given currency.
    pub fn new(currency: Currency) -> Self {
        let slots = SLOT_DEFINITIONS
            .iter()
            .map(|definition| SlotEntry {
                definition: *definition,
                value: SlotValue::empty_for(definition),
            })
            .collect();
        Self {
            slots,
            extras: Vec::new(),
            next_extra_key: 0,
            currency,
        }
    }

    fn slot_mut(&mut self, category: HardwareCategory) -> &mut SlotEntry {
        self.slots
            .iter_mut()
            .find(|s| s.definition.category == category)
            .expect("every hardware category has a slot")
    }

    fn slot(&self, category: HardwareCategory) -> &SlotEntry {
        self.slots
            .iter()
            .find(|s| s.definition.category == category)
            .expect("every hardware category has a slot")
    }

    /// Iterate slots in declaration order.
    pub fn slots(&self) -> impl Iterator<Item = &SlotEntry> {
        self.slots.iter()
    }

    /// Select an item into its slot.
    ///
    /// Single slots replace any existing value; multi slots append (bag
    /// semantics, duplicates allowed). Always succeeds — catalog membership
    /// is the caller's responsibility.
    pub fn select(&mut self, item: HardwareItem) {
        let slot = self.slot_mut(item.category);
        match &mut slot.value {
            SlotValue::Single(value) => *value = Some(item),
            SlotValue::Multi(items) => items.push(item),
        }
    }

    /// Remove one occurrence of an item from a slot.
    ///
    /// Multi slots remove exactly the first matching entry (quantity
    /// decrement, not clear-all); single slots clear only when the id
    /// matches. Returns whether anything was removed.
    pub fn remove_one(&mut self, category: HardwareCategory, item_id: &ItemId) -> bool {
        let slot = self.slot_mut(category);
        match &mut slot.value {
            SlotValue::Single(value) => {
                if value.as_ref().map(|i| &i.id == item_id).unwrap_or(false) {
                    *value = None;
                    true
                } else {
                    false
                }
            }
            SlotValue::Multi(items) => {
                if let Some(pos) = items.iter().position(|i| &i.id == item_id) {
                    items.remove(pos);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Empty a slot unconditionally.
    pub fn clear(&mut self, category: HardwareCategory) {
        let slot = self.slot_mut(category);
        slot.value = SlotValue::empty_for(&slot.definition);
    }

    /// How many occurrences of an item a slot holds.
    pub fn count_of(&self, category: HardwareCategory, item_id: &ItemId) -> usize {
        self.slot(category).value.count_of(item_id)
    }

    /// The selected item of a single slot, if any.
    ///
    /// Returns None for multi slots; the compatibility rules only ever
    /// depend on single-valued slots (processor, motherboard).
    pub fn selected_single(&self, category: HardwareCategory) -> Option<&HardwareItem> {
        match &self.slot(category).value {
            SlotValue::Single(value) => value.as_ref(),
            SlotValue::Multi(_) => None,
        }
    }

    /// Iterate the entries of one slot.
    pub fn items_in(&self, category: HardwareCategory) -> impl Iterator<Item = &HardwareItem> {
        self.slot(category).value.items()
    }

    /// Total number of hardware entries across all slots.
    pub fn hardware_entry_count(&self) -> usize {
        self.slots.iter().map(|s| s.value.len()).sum()
    }

    /// Add an extra product as a new line item.
    ///
    /// Each addition is a distinct entry with its own key, even for a
    /// product already present.
    pub fn add_extra(&mut self, product: ExtraProduct) -> ExtraKey {
        let key = ExtraKey(self.next_extra_key);
        self.next_extra_key += 1;
        self.extras.push(ExtraLineItem { key, product });
        key
    }

    /// Remove the first extra line item matching a product id.
    pub fn remove_one_extra(&mut self, product_id: &ProductId) -> bool {
        if let Some(pos) = self.extras.iter().position(|e| &e.product.id == product_id) {
            self.extras.remove(pos);
            true
        } else {
            false
        }
    }

    /// Extra line items, insertion order.
    pub fn extras(&self) -> &[ExtraLineItem] {
        &self.extras
    }

    /// How many extra line items reference a product id.
    pub fn count_of_extra(&self, product_id: &ProductId) -> usize {
        self.extras
            .iter()
            .filter(|e| &e.product.id == product_id)
            .count()
    }

    /// Labels of unsatisfied required slots, declaration order.
    pub fn missing_required_labels(&self) -> Vec<&'static str> {
        self.slots
            .iter()
            .filter(|s| s.definition.required && s.value.is_empty())
            .map(|s| s.definition.label)
            .collect()
    }

    /// Whether every required slot holds at least one entry.
    pub fn is_quotable(&self) -> bool {
        self.missing_required_labels().is_empty()
    }

    /// Current price of everything selected, recomputed from scratch.
    pub fn total(&self) -> Result<Money, BuilderError> {
        Ok(self.calculate_pricing()?.grand_total)
    }
}

impl Default for BuildSelection {
    fn default() -> Self {
        Self::new(Currency::BRL)
    }
}

//! Build pricing calculations.

use crate::build::BuildSelection;
use crate::catalog::HardwareCategory;
use crate::error::BuilderError;
use crate::money::Money;
use serde::Serialize;

/// Complete pricing breakdown for a build.
///
/// Serialize-only, like the selection it is derived from.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BuildPricing {
    /// Per-slot subtotals, slot declaration order.
    pub slot_subtotals: Vec<SlotSubtotal>,
    /// Sum of all hardware entries' unit prices.
    pub hardware_subtotal: Money,
    /// Sum of all extra line items' snapshotted prices.
    pub extras_subtotal: Money,
    /// Hardware subtotal + extras subtotal.
    pub grand_total: Money,
}

/// Subtotal for one slot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlotSubtotal {
    /// Slot category.
    pub category: HardwareCategory,
    /// Slot display label.
    pub label: &'static str,
    /// Number of entries in the slot.
    pub entry_count: usize,
    /// Sum of the entries' unit prices.
    pub subtotal: Money,
}

impl BuildSelection {
    /// Recompute the full pricing breakdown from scratch.
    ///
    /// Deliberately no caching or incremental deltas: the dataset is tens
    /// of components and full recomputation keeps every state change
    /// trivially consistent.
    pub fn calculate_pricing(&self) -> Result<BuildPricing, BuilderError> {
        let currency = self.currency;
        let mut slot_subtotals = Vec::new();
        let mut hardware_subtotal = Money::zero(currency);

        for slot in self.slots() {
            let prices: Vec<Money> = slot.value.items().map(|i| i.price).collect();
            let subtotal = Money::try_sum(prices.iter(), currency).ok_or_else(|| {
                money_error(&prices, currency)
            })?;
            hardware_subtotal = hardware_subtotal
                .try_add(&subtotal)
                .ok_or(BuilderError::Overflow)?;
            slot_subtotals.push(SlotSubtotal {
                category: slot.definition.category,
                label: slot.definition.label,
                entry_count: slot.value.len(),
                subtotal,
            });
        }

        let extra_prices: Vec<Money> = self.extras().iter().map(|e| e.product.price).collect();
        let extras_subtotal = Money::try_sum(extra_prices.iter(), currency)
            .ok_or_else(|| money_error(&extra_prices, currency))?;

        let grand_total = hardware_subtotal
            .try_add(&extras_subtotal)
            .ok_or(BuilderError::Overflow)?;

        Ok(BuildPricing {
            slot_subtotals,
            hardware_subtotal,
            extras_subtotal,
            grand_total,
        })
    }
}

/// Distinguish a mismatched currency from an overflow in a failed sum.
fn money_error(prices: &[Money], expected: crate::money::Currency) -> BuilderError {
    if let Some(odd) = prices.iter().find(|p| p.currency != expected) {
        BuilderError::CurrencyMismatch {
            expected: expected.code().to_string(),
            got: odd.currency.code().to_string(),
        }
    } else {
        BuilderError::Overflow
    }
}

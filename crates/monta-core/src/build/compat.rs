//! Cross-component compatibility filtering.

use crate::build::BuildSelection;
use crate::catalog::{HardwareCategory, HardwareItem};

/// Narrow a catalog list to items compatible with the current selection.
///
/// Rules, applied independently:
/// - Motherboard candidates must match the selected processor's socket.
/// - Memory candidates must match the selected motherboard's memory type.
/// - No other cross-slot constraints.
///
/// An unknown attribute on either side (absent or empty) exempts the item
/// from the rule. Input order is preserved; sorting is the caller's choice.
///
/// Checking is one-directional and non-retroactive: replacing the processor
/// after a motherboard is chosen does not re-validate or clear the
/// motherboard.
pub fn filter_compatible(
    items: &[HardwareItem],
    category: HardwareCategory,
    selection: &BuildSelection,
) -> Vec<HardwareItem> {
    let required_socket = match category {
        HardwareCategory::Motherboard => selection
            .selected_single(HardwareCategory::Processor)
            .and_then(|cpu| cpu.socket()),
        _ => None,
    };
    let required_memory_type = match category {
        HardwareCategory::Memory => selection
            .selected_single(HardwareCategory::Motherboard)
            .and_then(|mb| mb.memory_type()),
        _ => None,
    };

    items
        .iter()
        .filter(|item| match (required_socket, item.socket()) {
            (Some(required), Some(socket)) => socket == required,
            _ => true,
        })
        .filter(|item| match (required_memory_type, item.memory_type()) {
            (Some(required), Some(memory_type)) => memory_type == required,
            _ => true,
        })
        .cloned()
        .collect()
}

/// Sort items by ascending price, keeping catalog order for ties.
pub fn sort_by_price_ascending(items: &mut [HardwareItem]) {
    // Vec::sort_by_key is stable.
    items.sort_by_key(|i| i.price.amount_cents);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn cpu_am5() -> HardwareItem {
        HardwareItem::new(
            "cpu-1",
            HardwareCategory::Processor,
            "AMD",
            "Ryzen 5 7600",
            Money::new(129990, Currency::BRL),
        )
        .unwrap()
        .with_socket("AM5")
    }

    fn motherboard(id: &str, socket: Option<&str>) -> HardwareItem {
        let item = HardwareItem::new(
            id,
            HardwareCategory::Motherboard,
            "ASUS",
            "Prime",
            Money::new(89990, Currency::BRL),
        )
        .unwrap();
        match socket {
            Some(s) => item.with_socket(s),
            None => item,
        }
    }

    fn memory(id: &str, memory_type: Option<&str>, price: i64) -> HardwareItem {
        let item = HardwareItem::new(
            id,
            HardwareCategory::Memory,
            "Kingston",
            "Fury",
            Money::new(price, Currency::BRL),
        )
        .unwrap();
        match memory_type {
            Some(t) => item.with_memory_type(t),
            None => item,
        }
    }

    #[test]
    fn test_motherboard_filtered_by_processor_socket() {
        let mut selection = BuildSelection::default();
        selection.select(cpu_am5());

        let catalog = vec![
            motherboard("mb-am5", Some("AM5")),
            motherboard("mb-am4", Some("AM4")),
            motherboard("mb-lga", Some("LGA1700")),
            motherboard("mb-unknown", None),
            motherboard("mb-blank", Some("")),
        ];
        let filtered = filter_compatible(&catalog, HardwareCategory::Motherboard, &selection);
        let ids: Vec<_> = filtered.iter().map(|i| i.id.as_str()).collect();

        // Matching socket kept; unknown/blank socket exempt from the rule.
        assert_eq!(ids, vec!["mb-am5", "mb-unknown", "mb-blank"]);
    }

    #[test]
    fn test_no_processor_means_no_motherboard_filtering() {
        let selection = BuildSelection::default();
        let catalog = vec![
            motherboard("mb-am5", Some("AM5")),
            motherboard("mb-am4", Some("AM4")),
        ];
        let filtered = filter_compatible(&catalog, HardwareCategory::Motherboard, &selection);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_memory_filtered_by_motherboard_type() {
        let mut selection = BuildSelection::default();
        selection.select(motherboard("mb-1", Some("AM5")).with_memory_type("DDR5"));

        let catalog = vec![
            memory("ram-ddr5", Some("DDR5"), 29990),
            memory("ram-ddr4", Some("DDR4"), 19990),
            memory("ram-unknown", None, 24990),
        ];
        let filtered = filter_compatible(&catalog, HardwareCategory::Memory, &selection);
        let ids: Vec<_> = filtered.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["ram-ddr5", "ram-unknown"]);
    }

    #[test]
    fn test_unconstrained_categories_pass_through() {
        let mut selection = BuildSelection::default();
        selection.select(cpu_am5());

        let catalog = vec![HardwareItem::new(
            "gpu-1",
            HardwareCategory::Gpu,
            "NVIDIA",
            "RTX 4060",
            Money::new(199990, Currency::BRL),
        )
        .unwrap()];
        let filtered = filter_compatible(&catalog, HardwareCategory::Gpu, &selection);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_empty_result_is_valid_state() {
        let mut selection = BuildSelection::default();
        selection.select(cpu_am5());

        let catalog = vec![motherboard("mb-am4", Some("AM4"))];
        let filtered = filter_compatible(&catalog, HardwareCategory::Motherboard, &selection);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_price_sort_is_stable() {
        let mut items = vec![
            memory("ram-b", Some("DDR5"), 29990),
            memory("ram-a", Some("DDR5"), 19990),
            memory("ram-c", Some("DDR5"), 19990),
        ];
        sort_by_price_ascending(&mut items);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        // Ties broken by catalog order: ram-a before ram-c.
        assert_eq!(ids, vec!["ram-a", "ram-c", "ram-b"]);
    }

    #[test]
    fn test_dependency_change_is_not_retroactive() {
        let mut selection = BuildSelection::default();
        selection.select(cpu_am5());
        selection.select(motherboard("mb-am5", Some("AM5")));

        // Swapping the processor afterwards leaves the motherboard in place.
        selection.select(
            HardwareItem::new(
                "cpu-2",
                HardwareCategory::Processor,
                "Intel",
                "Core i5-13400",
                Money::new(119990, Currency::BRL),
            )
            .unwrap()
            .with_socket("LGA1700"),
        );
        assert_eq!(
            selection
                .selected_single(HardwareCategory::Motherboard)
                .unwrap()
                .id
                .as_str(),
            "mb-am5"
        );
    }
}

//! Cart hand-off boundary.

use crate::money::Money;
use crate::quote::QuoteDocument;
use serde::{Deserialize, Serialize};

/// One item handed to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Identity of the source item/product.
    pub source_id: String,
    /// Item title.
    pub title: String,
    /// Category display label.
    pub category_label: String,
    /// Unit price.
    pub unit_price: Money,
}

/// Downstream cart accepting finalized line items.
///
/// Fire-and-forget from the core's perspective: the core hands over one
/// line per quote row without merging identical items; whatever
/// merge-by-id or quantity semantics apply downstream are the sink's
/// choice.
pub trait CartSink {
    fn add(&mut self, line: CartLine);
}

/// Hand a quote's rows to a cart, hardware rows first, then extras,
/// each in document order.
pub fn push_to_cart(document: &QuoteDocument, sink: &mut dyn CartSink) {
    for line in document.hardware_lines.iter().chain(&document.extra_lines) {
        sink.add(CartLine {
            source_id: line.source_id.clone(),
            title: line.description.clone(),
            category_label: line.category_label.clone(),
            unit_price: line.unit_price,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildSelection, ExtraProduct};
    use crate::catalog::{HardwareCategory, HardwareItem};
    use crate::money::Currency;
    use crate::quote::SellerInfo;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct RecordingSink {
        lines: Vec<CartLine>,
    }

    impl CartSink for RecordingSink {
        fn add(&mut self, line: CartLine) {
            self.lines.push(line);
        }
    }

    fn item(id: &str, category: HardwareCategory, cents: i64) -> HardwareItem {
        HardwareItem::new(id, category, "Marca", "Modelo", Money::new(cents, Currency::BRL))
            .unwrap()
    }

    fn document() -> QuoteDocument {
        let mut selection = BuildSelection::default();
        selection.select(item("cpu-1", HardwareCategory::Processor, 129990));
        selection.select(item("mb-1", HardwareCategory::Motherboard, 89990));
        selection.select(item("ram-1", HardwareCategory::Memory, 29990));
        selection.select(item("ram-1", HardwareCategory::Memory, 29990));
        selection.select(item("ssd-1", HardwareCategory::Storage, 45990));
        selection.select(item("psu-1", HardwareCategory::Psu, 39990));
        selection.select(item("case-1", HardwareCategory::Case, 54990));
        selection.add_extra(
            ExtraProduct::new(
                "p-1",
                "Mouse Gamer",
                "Periféricos",
                Money::new(9990, Currency::BRL),
            )
            .unwrap(),
        );
        QuoteDocument::build(
            &selection,
            SellerInfo::new("Ana", "Monta Hardware"),
            NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_one_cart_line_per_row_no_merging() {
        let doc = document();
        let mut sink = RecordingSink::default();
        push_to_cart(&doc, &mut sink);

        assert_eq!(sink.lines.len(), doc.line_count());
        // The duplicated memory stick arrives twice, unmerged.
        let memory_lines = sink
            .lines
            .iter()
            .filter(|l| l.source_id == "ram-1")
            .count();
        assert_eq!(memory_lines, 2);
    }

    #[test]
    fn test_hardware_precedes_extras() {
        let doc = document();
        let mut sink = RecordingSink::default();
        push_to_cart(&doc, &mut sink);

        let last = sink.lines.last().unwrap();
        assert_eq!(last.source_id, "p-1");
        assert_eq!(last.category_label, "Periféricos");
        assert_eq!(sink.lines[0].source_id, "cpu-1");
    }
}

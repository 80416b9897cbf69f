//! Quote document: the immutable snapshot of a finished build.

use crate::build::BuildSelection;
use crate::error::BuilderError;
use crate::ids::QuoteId;
use crate::money::Money;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// How long a quote stays valid, in calendar days.
pub const VALIDITY_DAYS: u64 = 7;

/// Seller and company metadata stamped onto a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerInfo {
    /// Seller name.
    pub name: String,
    /// Company name.
    pub company: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
}

impl SellerInfo {
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            phone: None,
            email: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// One row in a quote table.
///
/// Every slot entry and every extra line item gets its own row,
/// individually priced — a multi slot with three entries yields three rows,
/// never one row with a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLine {
    /// Identity of the source item/product.
    pub source_id: String,
    /// Category display label (slot label for hardware rows).
    pub category_label: String,
    /// Item description ("Brand Model" or product title).
    pub description: String,
    /// Unit price.
    pub unit_price: Money,
}

/// An immutable, printable/shareable quote.
///
/// Built only by [`QuoteDocument::build`]; carries no mutating methods.
/// Mutating the selection afterwards never alters an already built
/// document — further edits mean regenerating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteDocument {
    /// Unique quote identifier.
    pub id: QuoteId,
    /// Emission date.
    pub issued_on: NaiveDate,
    /// Last day the quote is honored (emission + 7 calendar days).
    pub valid_until: NaiveDate,
    /// Seller/company metadata.
    pub seller: SellerInfo,
    /// Hardware rows, slot declaration order; empty slots omitted.
    pub hardware_lines: Vec<QuoteLine>,
    /// Extra rows, insertion order.
    pub extra_lines: Vec<QuoteLine>,
    /// Sum of hardware rows.
    pub hardware_subtotal: Money,
    /// Sum of extra rows.
    pub extras_subtotal: Money,
    /// Hardware + extras.
    pub grand_total: Money,
}

impl QuoteDocument {
    /// Snapshot a selection into a quote dated `issued_on`.
    ///
    /// Validates first: every required slot must hold at least one entry,
    /// otherwise `MissingRequiredComponents` carries the unsatisfied slot
    /// labels in declaration order and nothing is created. The selection is
    /// never mutated either way.
    pub fn build(
        selection: &BuildSelection,
        seller: SellerInfo,
        issued_on: NaiveDate,
    ) -> Result<Self, BuilderError> {
        let missing = selection.missing_required_labels();
        if !missing.is_empty() {
            return Err(BuilderError::MissingRequiredComponents(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        let pricing = selection.calculate_pricing()?;

        let hardware_lines = selection
            .slots()
            .flat_map(|slot| {
                slot.value.items().map(move |item| QuoteLine {
                    source_id: item.id.as_str().to_string(),
                    category_label: slot.definition.label.to_string(),
                    description: item.display_name(),
                    unit_price: item.price,
                })
            })
            .collect();

        let extra_lines = selection
            .extras()
            .iter()
            .map(|entry| QuoteLine {
                source_id: entry.product.id.as_str().to_string(),
                category_label: entry.product.category_label.clone(),
                description: entry.product.title.clone(),
                unit_price: entry.product.price,
            })
            .collect();

        Ok(Self {
            id: QuoteId::generate(),
            issued_on,
            valid_until: issued_on + Days::new(VALIDITY_DAYS),
            seller,
            hardware_lines,
            extra_lines,
            hardware_subtotal: pricing.hardware_subtotal,
            extras_subtotal: pricing.extras_subtotal,
            grand_total: pricing.grand_total,
        })
    }

    /// Snapshot a selection into a quote dated today.
    pub fn build_today(
        selection: &BuildSelection,
        seller: SellerInfo,
    ) -> Result<Self, BuilderError> {
        Self::build(selection, seller, chrono::Local::now().date_naive())
    }

    /// Total number of rows across both tables.
    pub fn line_count(&self) -> usize {
        self.hardware_lines.len() + self.extra_lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::ExtraProduct;
    use crate::catalog::{HardwareCategory, HardwareItem};
    use crate::money::Currency;

    fn item(id: &str, category: HardwareCategory, cents: i64) -> HardwareItem {
        HardwareItem::new(id, category, "Marca", "Modelo", Money::new(cents, Currency::BRL))
            .unwrap()
    }

    fn seller() -> SellerInfo {
        SellerInfo::new("Ana", "Monta Hardware").with_phone("+55 11 99999-0000")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    /// Processor, motherboard, 2x memory, storage, psu, case — gpu and
    /// cooler deliberately omitted.
    fn complete_selection() -> BuildSelection {
        let mut selection = BuildSelection::default();
        selection.select(item("cpu-1", HardwareCategory::Processor, 129990));
        selection.select(item("mb-1", HardwareCategory::Motherboard, 89990));
        selection.select(item("ram-1", HardwareCategory::Memory, 29990));
        selection.select(item("ram-1", HardwareCategory::Memory, 29990));
        selection.select(item("ssd-1", HardwareCategory::Storage, 45990));
        selection.select(item("psu-1", HardwareCategory::Psu, 39990));
        selection.select(item("case-1", HardwareCategory::Case, 54990));
        selection
    }

    #[test]
    fn test_missing_required_slots_fail_with_all_labels() {
        let selection = BuildSelection::default();
        let err = QuoteDocument::build(&selection, seller(), date()).unwrap_err();
        let labels: Vec<&str> = err
            .missing_labels()
            .unwrap()
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Processador",
                "Placa-mãe",
                "Memória",
                "Armazenamento",
                "Fonte",
                "Gabinete"
            ]
        );
    }

    #[test]
    fn test_partial_selection_lists_remaining_labels() {
        let mut selection = BuildSelection::default();
        selection.select(item("cpu-1", HardwareCategory::Processor, 129990));
        selection.select(item("case-1", HardwareCategory::Case, 54990));

        let err = QuoteDocument::build(&selection, seller(), date()).unwrap_err();
        let labels: Vec<&str> = err
            .missing_labels()
            .unwrap()
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(labels, vec!["Placa-mãe", "Memória", "Armazenamento", "Fonte"]);
    }

    #[test]
    fn test_complete_build_row_shape() {
        let doc = QuoteDocument::build(&complete_selection(), seller(), date()).unwrap();

        // 2 memory entries are 2 rows, not one row with quantity 2;
        // unsatisfied optional slots (gpu, cooler) are omitted entirely.
        assert_eq!(doc.hardware_lines.len(), 6);
        let memory_rows = doc
            .hardware_lines
            .iter()
            .filter(|l| l.category_label == "Memória")
            .count();
        assert_eq!(memory_rows, 2);
        assert!(doc.extra_lines.is_empty());
    }

    #[test]
    fn test_rows_follow_declaration_order() {
        let doc = QuoteDocument::build(&complete_selection(), seller(), date()).unwrap();
        let labels: Vec<_> = doc
            .hardware_lines
            .iter()
            .map(|l| l.category_label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Processador",
                "Placa-mãe",
                "Memória",
                "Memória",
                "Armazenamento",
                "Fonte",
                "Gabinete"
            ]
        );
    }

    #[test]
    fn test_validity_window() {
        let doc = QuoteDocument::build(&complete_selection(), seller(), date()).unwrap();
        assert_eq!(doc.issued_on, date());
        assert_eq!(doc.valid_until, NaiveDate::from_ymd_opt(2026, 9, 4).unwrap());
    }

    #[test]
    fn test_total_matches_aggregator() {
        let selection = complete_selection();
        let expected = selection.calculate_pricing().unwrap().grand_total;
        let doc = QuoteDocument::build(&selection, seller(), date()).unwrap();
        assert_eq!(doc.grand_total, expected);
        assert_eq!(
            doc.grand_total,
            doc.hardware_subtotal + doc.extras_subtotal
        );
    }

    #[test]
    fn test_extras_are_individual_rows() {
        let mut selection = complete_selection();
        let mouse = ExtraProduct::new(
            "p-1",
            "Mouse Gamer",
            "Periféricos",
            Money::new(9990, Currency::BRL),
        )
        .unwrap();
        selection.add_extra(mouse.clone());
        selection.add_extra(mouse);

        let doc = QuoteDocument::build(&selection, seller(), date()).unwrap();
        assert_eq!(doc.extra_lines.len(), 2);
        assert_eq!(doc.extras_subtotal.amount_cents, 19980);
    }

    #[test]
    fn test_idempotent_on_unchanged_state() {
        let selection = complete_selection();
        let a = QuoteDocument::build(&selection, seller(), date()).unwrap();
        let b = QuoteDocument::build(&selection, seller(), date()).unwrap();

        assert_eq!(a.hardware_lines, b.hardware_lines);
        assert_eq!(a.extra_lines, b.extra_lines);
        assert_eq!(a.grand_total, b.grand_total);
    }

    #[test]
    fn test_json_roundtrip() {
        let doc = QuoteDocument::build(&complete_selection(), seller(), date()).unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        let back: QuoteDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_mutation() {
        let mut selection = complete_selection();
        let doc = QuoteDocument::build(&selection, seller(), date()).unwrap();
        let total_before = doc.grand_total;

        selection.select(item("gpu-1", HardwareCategory::Gpu, 199990));
        assert_eq!(doc.grand_total, total_before);
        assert_eq!(doc.hardware_lines.len(), 6);
    }
}

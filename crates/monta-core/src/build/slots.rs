//! Slot definitions and slot values.

use crate::catalog::{HardwareCategory, HardwareItem};
use crate::ids::ItemId;
use serde::Serialize;

/// Static configuration of one hardware category's role in a build.
///
/// Serialize-only: the table is compiled in, never read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotDefinition {
    /// Category this slot holds.
    pub category: HardwareCategory,
    /// Display label.
    pub label: &'static str,
    /// A build cannot be quoted while a required slot is unsatisfied.
    pub required: bool,
    /// Bag semantics (ordered, duplicates allowed) vs. single value.
    pub multiple: bool,
}

/// The fixed slot table, in declaration order.
///
/// Declaration order drives quote row order and the order of
/// missing-component labels in validation errors.
pub const SLOT_DEFINITIONS: [SlotDefinition; 8] = [
    SlotDefinition {
        category: HardwareCategory::Processor,
        label: "Processador",
        required: true,
        multiple: false,
    },
    SlotDefinition {
        category: HardwareCategory::Motherboard,
        label: "Placa-mãe",
        required: true,
        multiple: false,
    },
    SlotDefinition {
        category: HardwareCategory::Memory,
        label: "Memória",
        required: true,
        multiple: true,
    },
    SlotDefinition {
        category: HardwareCategory::Storage,
        label: "Armazenamento",
        required: true,
        multiple: true,
    },
    SlotDefinition {
        category: HardwareCategory::Gpu,
        label: "Placa de vídeo",
        required: false,
        multiple: false,
    },
    SlotDefinition {
        category: HardwareCategory::Cooler,
        label: "Cooler",
        required: false,
        multiple: false,
    },
    SlotDefinition {
        category: HardwareCategory::Psu,
        label: "Fonte",
        required: true,
        multiple: false,
    },
    SlotDefinition {
        category: HardwareCategory::Case,
        label: "Gabinete",
        required: true,
        multiple: false,
    },
];

/// Look up the definition for a category.
pub fn slot_definition(category: HardwareCategory) -> &'static SlotDefinition {
    SLOT_DEFINITIONS
        .iter()
        .find(|d| d.category == category)
        .expect("every hardware category has a slot definition")
}

/// The contents of one slot.
///
/// The variant is fixed by the slot's definition at construction, so
/// consumers never have to ask "is this an array or a single value" at
/// runtime. A multi slot's Vec is insertion-ordered and allows duplicates;
/// empty is an empty Vec, never a missing value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SlotValue {
    Single(Option<HardwareItem>),
    Multi(Vec<HardwareItem>),
}

impl SlotValue {
    /// Empty value of the right shape for a definition.
    pub fn empty_for(definition: &SlotDefinition) -> Self {
        if definition.multiple {
            SlotValue::Multi(Vec::new())
        } else {
            SlotValue::Single(None)
        }
    }

    /// Whether the slot holds no entries.
    pub fn is_empty(&self) -> bool {
        match self {
            SlotValue::Single(value) => value.is_none(),
            SlotValue::Multi(items) => items.is_empty(),
        }
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        match self {
            SlotValue::Single(None) => 0,
            SlotValue::Single(Some(_)) => 1,
            SlotValue::Multi(items) => items.len(),
        }
    }

    /// Iterate the entries, insertion order for multi slots.
    pub fn items(&self) -> impl Iterator<Item = &HardwareItem> {
        match self {
            SlotValue::Single(value) => value.as_slice().iter(),
            SlotValue::Multi(items) => items.as_slice().iter(),
        }
    }

    /// How many entries match an item id.
    pub fn count_of(&self, item_id: &ItemId) -> usize {
        self.items().filter(|i| &i.id == item_id).count()
    }
}

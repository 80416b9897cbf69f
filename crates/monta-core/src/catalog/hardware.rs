//! Hardware catalog types.

use crate::error::BuilderError;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of hardware categories a build slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HardwareCategory {
    Processor,
    Motherboard,
    Memory,
    Storage,
    Gpu,
    Cooler,
    Psu,
    Case,
}

impl HardwareCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HardwareCategory::Processor => "processor",
            HardwareCategory::Motherboard => "motherboard",
            HardwareCategory::Memory => "memory",
            HardwareCategory::Storage => "storage",
            HardwareCategory::Gpu => "gpu",
            HardwareCategory::Cooler => "cooler",
            HardwareCategory::Psu => "psu",
            HardwareCategory::Case => "case",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "processor" => Some(HardwareCategory::Processor),
            "motherboard" => Some(HardwareCategory::Motherboard),
            "memory" => Some(HardwareCategory::Memory),
            "storage" => Some(HardwareCategory::Storage),
            "gpu" => Some(HardwareCategory::Gpu),
            "cooler" => Some(HardwareCategory::Cooler),
            "psu" => Some(HardwareCategory::Psu),
            "case" => Some(HardwareCategory::Case),
            _ => None,
        }
    }

    /// Storefront display label.
    pub fn display_name(&self) -> &'static str {
        match self {
            HardwareCategory::Processor => "Processador",
            HardwareCategory::Motherboard => "Placa-mãe",
            HardwareCategory::Memory => "Memória",
            HardwareCategory::Storage => "Armazenamento",
            HardwareCategory::Gpu => "Placa de vídeo",
            HardwareCategory::Cooler => "Cooler",
            HardwareCategory::Psu => "Fonte",
            HardwareCategory::Case => "Gabinete",
        }
    }
}

impl fmt::Display for HardwareCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchasable hardware component.
///
/// Immutable once fetched from the catalog; the selection state snapshots
/// the value as-is and never rewrites it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HardwareItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Hardware category.
    pub category: HardwareCategory,
    /// Manufacturer brand.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Unit price (non-negative).
    pub price: Money,
    /// CPU/motherboard socket code (e.g., "AM5"). Absent or empty means
    /// unknown, treated as compatible with anything.
    pub socket: Option<String>,
    /// Memory type code (e.g., "DDR5"). Same unknown semantics as socket.
    pub memory_type: Option<String>,
    /// Thermal design power in watts, used for PSU sizing.
    pub tdp_watts: Option<u32>,
}

impl HardwareItem {
    /// Create a new item with no compatibility attributes.
    ///
    /// Rejects a negative unit price; the catalog boundary is where the
    /// non-negativity of prices is established.
    pub fn new(
        id: impl Into<ItemId>,
        category: HardwareCategory,
        brand: impl Into<String>,
        model: impl Into<String>,
        price: Money,
    ) -> Result<Self, BuilderError> {
        let id = id.into();
        if price.is_negative() {
            return Err(BuilderError::InvalidItem(format!(
                "negative price for {}",
                id
            )));
        }
        Ok(Self {
            id,
            category,
            brand: brand.into(),
            model: model.into(),
            price,
            socket: None,
            memory_type: None,
            tdp_watts: None,
        })
    }

    /// Set the socket code.
    pub fn with_socket(mut self, socket: impl Into<String>) -> Self {
        self.socket = Some(socket.into());
        self
    }

    /// Set the memory type code.
    pub fn with_memory_type(mut self, memory_type: impl Into<String>) -> Self {
        self.memory_type = Some(memory_type.into());
        self
    }

    /// Set the TDP rating.
    pub fn with_tdp_watts(mut self, watts: u32) -> Self {
        self.tdp_watts = Some(watts);
        self
    }

    /// Display name, "Brand Model".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Socket code, with empty strings normalized to None.
    pub fn socket(&self) -> Option<&str> {
        self.socket.as_deref().filter(|s| !s.is_empty())
    }

    /// Memory type code, with empty strings normalized to None.
    pub fn memory_type(&self) -> Option<&str> {
        self.memory_type.as_deref().filter(|s| !s.is_empty())
    }
}

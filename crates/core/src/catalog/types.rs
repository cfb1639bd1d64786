//! Service catalog types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single service offered for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Service name (unique key within the catalog).
    pub name: String,
    /// Base cost in the base currency, before any margin.
    pub base_cost: Decimal,
}

/// The immutable service catalog.
///
/// Built once at startup and passed by reference into the pricing engine.
/// Lookups are by exact service name; a duplicate name in the input keeps
/// the last entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: BTreeMap<String, Decimal>,
}

impl Catalog {
    /// Builds a catalog from entries.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.name, e.base_cost))
                .collect(),
        }
    }

    /// Returns the base cost for a service, if it exists.
    #[must_use]
    pub fn base_cost(&self, service: &str) -> Option<Decimal> {
        self.entries.get(service).copied()
    }

    /// Returns true if the catalog knows this service.
    #[must_use]
    pub fn contains(&self, service: &str) -> bool {
        self.entries.contains_key(service)
    }

    /// Number of services in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no services.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over (name, base cost) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(name, cost)| (name.as_str(), *cost))
    }
}

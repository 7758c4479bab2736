use serde::{Deserialize, Serialize};

use shelflife_core::DomainResult;

use crate::item::{Item, ItemSpec};

/// Ordered collection of stocked items, advanced one simulated day at a time.
///
/// Items never interact during an update; the order only fixes the report
/// order. Serializes transparently as its item list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Validate every raw description and build the inventory.
    ///
    /// Fail-fast: the first violation rejects the whole list, no partial
    /// inventory is ever produced.
    pub fn new(specs: Vec<ItemSpec>) -> DomainResult<Inventory> {
        let items = specs
            .into_iter()
            .map(Item::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Inventory { items })
    }

    /// Advance every item by exactly one day, in sequence order, and return
    /// the same (now mutated) list.
    ///
    /// Never fails: all quality arithmetic is clamped and the sell-in
    /// countdown floors at zero.
    pub fn update(&mut self) -> &[Item] {
        for item in &mut self.items {
            item.age_one_day();
        }
        tracing::debug!(items = self.items.len(), "inventory advanced one day");
        &self.items
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

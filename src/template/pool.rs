use crate::inventory::{ComponentType, InventoryItem};

/// Snapshot of the available inventory for one component type, owned by a
/// single import run. Items are removed once assigned so no later entry can
/// claim them again.
#[derive(Debug)]
pub struct WorkingPool {
    component_type: ComponentType,
    items: Vec<InventoryItem>,
}

impl WorkingPool {
    pub fn new(component_type: ComponentType, items: Vec<InventoryItem>) -> Self {
        Self { component_type, items }
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item, in pool order, whose model name equals `model` exactly.
    pub fn find(&self, model: &str) -> Option<(usize, &InventoryItem)> {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.model_name() == Some(model))
    }

    pub fn claim(&mut self, index: usize) -> InventoryItem {
        self.items.remove(index)
    }
}

#[cfg(test)]
#[path = "pool_test.rs"]
mod pool_test;

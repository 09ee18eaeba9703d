use crate::entities::Item;
use anyhow::{Result, ensure};

/// The static (unmodifiable) representation of a knapsack problem:
/// an ordered list of [`Item`]s and a capacity. Shared by every solver of
/// every problem variant.
///
/// Weights, profits and the capacity are `u64`, so negative inputs are
/// unrepresentable. [`Instance::new`] instead rejects instances whose summed
/// weight or profit would not fit the `u64` accumulators the solvers rely on;
/// a validated instance can never make a 0-1 solver overflow.
#[derive(Clone, Debug)]
pub struct Instance {
    items: Vec<Item>,
    capacity: u64,
}

impl Instance {
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Instance> {
        ensure!(
            items
                .iter()
                .try_fold(0u64, |acc, item| acc.checked_add(item.weight))
                .is_some(),
            "summed item weight overflows u64"
        );
        ensure!(
            items
                .iter()
                .try_fold(0u64, |acc, item| acc.checked_add(item.profit))
                .is_some(),
            "summed item profit overflows u64"
        );

        Ok(Instance { items, capacity })
    }

    /// All items, in input order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// A specific item
    pub fn item(&self, id: usize) -> Item {
        self.items[id]
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

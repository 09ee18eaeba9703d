use std::cmp::Ordering;

/// Item that can be placed in the knapsack.
///
/// Items are immutable and identified by their position in the
/// [`Instance`](crate::entities::Instance) they belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Capacity consumed by selecting the item
    pub weight: u64,
    /// Profit gained by selecting the item
    pub profit: u64,
}

impl Item {
    pub fn new(weight: u64, profit: u64) -> Item {
        Item { weight, profit }
    }

    /// Profit per unit of weight, zero-weight items being infinitely dense.
    /// Diagnostics only; ordering decisions go through [`Item::cmp_density`].
    pub fn density(&self) -> f64 {
        if self.weight == 0 {
            return f64::INFINITY;
        }
        self.profit as f64 / self.weight as f64
    }

    /// Exact density comparison, evaluated as `u128` cross products so no
    /// precision is lost anywhere in the `u64` range.
    ///
    /// A zero-weight item with profit compares greater than any item with
    /// positive weight; an item with zero weight *and* zero profit compares
    /// equal to everything (0/0 is indeterminate), leaving its rank to the
    /// caller's tie-breaking rule.
    pub fn cmp_density(&self, other: &Item) -> Ordering {
        let lhs = self.profit as u128 * other.weight as u128;
        let rhs = other.profit as u128 * self.weight as u128;
        lhs.cmp(&rhs)
    }
}

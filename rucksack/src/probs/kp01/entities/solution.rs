/// Solution of a 0-1 knapsack instance: every item is selected 0 or 1 times.
///
/// Produced once per solve call and owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KPSolution {
    /// Ids of the selected items, ascending
    pub items: Vec<usize>,
    /// Summed profit of the selected items
    pub total_profit: u64,
    /// Summed weight of the selected items, never exceeds the instance capacity
    pub total_weight: u64,
}

impl KPSolution {
    pub fn is_selected(&self, id: usize) -> bool {
        self.items.binary_search(&id).is_ok()
    }
}

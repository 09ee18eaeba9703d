/// Solution of an unbounded knapsack instance: every item is selected any
/// non-negative number of times.
///
/// Produced once per solve call and owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UKPSolution {
    /// Number of selected copies of every item, indexed by item id
    pub counts: Vec<u64>,
    /// Summed profit over all selected copies
    pub total_profit: u64,
    /// Summed weight over all selected copies, never exceeds the instance capacity
    pub total_weight: u64,
}

impl UKPSolution {
    pub fn count(&self, id: usize) -> u64 {
        self.counts[id]
    }

    pub fn is_selected(&self, id: usize) -> bool {
        self.counts[id] > 0
    }
}

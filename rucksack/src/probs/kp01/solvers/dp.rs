use crate::entities::Instance;
use crate::probs::kp01::entities::KPSolution;
use crate::probs::kp01::util::assertions;
use log::debug;
use ndarray::Array2;

/// Solves a 0-1 knapsack instance to provable optimality by dynamic programming.
///
/// Classic tabulation: a single profit row indexed by capacity, one pass per
/// item, inner loop over weights in *descending* order so an item can never be
/// applied twice within its own pass (the unbounded solver iterates ascending
/// for exactly the opposite reason). `O(n * capacity)` time and, because of
/// the take-matrix used to rebuild the selection, `O(n * capacity)` space.
///
/// Ties are deterministic: updates are strict, so a later item never replaces
/// an equally profitable earlier one.
pub fn solve_dp(instance: &Instance) -> KPSolution {
    let n = instance.len();
    let capacity = instance.capacity() as usize;

    //best profit for every capacity 0..=C, restricted to the items processed so far
    let mut table = vec![0u64; capacity + 1];
    //take-matrix: item i strictly improved the profit at weight w during its pass
    let mut takes = Array2::from_elem((n, capacity + 1), false);

    for (i, item) in instance.items().iter().enumerate() {
        let weight = item.weight as usize;
        if weight > capacity {
            continue;
        }
        for w in (weight..=capacity).rev() {
            //table[w - weight] still holds the previous pass's value here
            let candidate = table[w - weight] + item.profit;
            if candidate > table[w] {
                table[w] = candidate;
                takes[[i, w]] = true;
            }
        }
    }

    //traceback from (n-1, C): a marked row means the prefix optimum took item i
    let mut items = Vec::new();
    let mut w = capacity;
    for i in (0..n).rev() {
        if takes[[i, w]] {
            items.push(i);
            w -= instance.item(i).weight as usize;
        }
    }
    items.reverse();

    let total_weight = items.iter().map(|&id| instance.item(id).weight).sum();
    let solution = KPSolution {
        items,
        total_profit: table[capacity],
        total_weight,
    };

    debug!(
        "[KP01-DP] {} items, capacity {}: optimum {}",
        n, capacity, solution.total_profit
    );
    debug_assert!(assertions::solution_matches_instance(instance, &solution));
    solution
}

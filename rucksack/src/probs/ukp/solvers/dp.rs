use crate::entities::Instance;
use crate::probs::ukp::entities::UKPSolution;
use crate::probs::ukp::solvers::ensure_bounded_optimum;
use crate::probs::ukp::util::assertions;
use anyhow::{Result, bail};
use log::debug;

/// Solves an unbounded knapsack instance to provable optimality by dynamic
/// programming.
///
/// Single profit row over capacity, one pass per item, inner loop *ascending*:
/// an item's contribution compounds within its own pass, which is exactly the
/// unbounded semantics (the 0-1 solver iterates descending for exactly the
/// opposite reason). A parallel traceback array records the item of the last
/// strict improvement per capacity; unwinding it from the full capacity yields
/// the multiplicities. Strict updates keep the earlier-indexed item on ties.
/// `O(n * capacity)` time, `O(capacity)` space.
///
/// Fails on instances whose optimum is unbounded (a zero-weight item with
/// positive profit) and surfaces accumulated-profit overflow instead of
/// wrapping, since silent wrapping would corrupt the optimality guarantee.
pub fn solve_dp(instance: &Instance) -> Result<UKPSolution> {
    ensure_bounded_optimum(instance)?;
    let n = instance.len();
    let capacity = instance.capacity() as usize;

    //best profit for every capacity 0..=C over any multiset of items
    let mut table = vec![0u64; capacity + 1];
    //id of the item whose pass last strictly improved the profit at each capacity
    let mut last_taken: Vec<Option<usize>> = vec![None; capacity + 1];

    for (id, item) in instance.items().iter().enumerate() {
        let weight = item.weight as usize;
        if weight == 0 || weight > capacity {
            //zero-weight items are all zero-profit here, never worth recording
            continue;
        }
        for w in weight..=capacity {
            //table[w - weight] may already include copies of this very item
            let Some(candidate) = table[w - weight].checked_add(item.profit) else {
                bail!("accumulated profit overflows u64 at capacity {w}");
            };
            if candidate > table[w] {
                table[w] = candidate;
                last_taken[w] = Some(id);
            }
        }
    }

    //unwind the traceback, counting the copies of every item; entries without
    //a recorded item hold profit 0 and end the walk
    let mut counts = vec![0u64; n];
    let mut w = capacity;
    while let Some(id) = last_taken[w] {
        counts[id] += 1;
        w -= instance.item(id).weight as usize;
    }

    let total_weight = counts
        .iter()
        .enumerate()
        .map(|(id, &count)| count * instance.item(id).weight)
        .sum();
    let solution = UKPSolution {
        counts,
        total_profit: table[capacity],
        total_weight,
    };

    debug!(
        "[UKP-DP] {} items, capacity {}: optimum {}",
        n, capacity, solution.total_profit
    );
    debug_assert!(assertions::solution_matches_instance(instance, &solution));
    Ok(solution)
}

use crate::entities::{Instance, Item};
use crate::probs::ukp::entities::UKPSolution;
use crate::probs::ukp::solvers::ensure_bounded_optimum;
use crate::probs::ukp::util::assertions;
use crate::util::sorting::density_sorted_ids;
use anyhow::{Result, bail};
use itertools::Itertools;
use log::debug;

/// State of the partial solution *before* taking `count` copies of the item at
/// `depth` of the density-sorted order. Value object owned by the search
/// stack; backtracking removes one copy at a time.
#[derive(Clone, Copy, Debug)]
struct Node {
    depth: usize,
    count: u64,
    profit: u64,
    slack: u64,
}

/// Solves an unbounded knapsack instance to provable optimality by branch &
/// bound.
///
/// Same skeleton as the 0-1 solver — depth-first over the density-sorted
/// items, greedy dives, fractional-relaxation pruning, strict incumbent
/// updates — except that a dive takes the *maximum multiplicity* that fits
/// and backtracking removes a single copy before moving on to the next item.
/// The bound is simpler than in the 0-1 case: the densest remaining item can
/// fill the entire remaining capacity fractionally.
///
/// Fails on instances whose optimum is unbounded (a zero-weight item with
/// positive profit) and surfaces accumulated-profit overflow instead of
/// wrapping.
pub fn solve_bnb(instance: &Instance) -> Result<UKPSolution> {
    ensure_bounded_optimum(instance)?;
    //zero-weight items are all zero-profit here and can never change the optimum
    let order = density_sorted_ids(instance)
        .into_iter()
        .filter(|&id| instance.item(id).weight > 0)
        .collect_vec();
    let sorted = order.iter().map(|&id| instance.item(id)).collect_vec();

    let mut best_profit = 0u64;
    let mut best_counts: Vec<(usize, u64)> = vec![];

    let mut stack: Vec<Node> = vec![];
    let mut depth = 0;
    let mut profit = 0u64;
    let mut slack = instance.capacity();
    let (mut n_nodes, mut n_pruned) = (0u64, 0u64);

    loop {
        //dive: take as many copies as fit of every item in density order
        let mut pruned = false;
        while depth < sorted.len() {
            let item = &sorted[depth];
            if slack >= item.weight {
                if upper_bound(item, profit, slack) <= best_profit as u128 {
                    pruned = true;
                    n_pruned += 1;
                    break;
                }
                let count = slack / item.weight;
                let Some(new_profit) = count
                    .checked_mul(item.profit)
                    .and_then(|gain| gain.checked_add(profit))
                else {
                    bail!("accumulated profit overflows u64 at item {}", order[depth]);
                };
                stack.push(Node {
                    depth,
                    count,
                    profit,
                    slack,
                });
                n_nodes += 1;
                profit = new_profit;
                slack -= count * item.weight;
            }
            depth += 1;
        }

        //all items decided: strictly better profit replaces the incumbent
        if !pruned && profit > best_profit {
            best_profit = profit;
            best_counts = stack.iter().map(|node| (node.depth, node.count)).collect();
        }

        //backtrack: remove one copy of the latest item, then explore onwards
        match stack.pop() {
            Some(node) => {
                let item = &sorted[node.depth];
                let count = node.count - 1;
                profit = node.profit + count * item.profit;
                slack = node.slack - count * item.weight;
                if count > 0 {
                    stack.push(Node { count, ..node });
                }
                depth = node.depth + 1;
            }
            None => break,
        }
    }

    debug!("[UKP-BNB] explored {n_nodes} nodes, pruned {n_pruned} subtrees");

    let mut counts = vec![0u64; instance.len()];
    for (depth, count) in best_counts {
        counts[order[depth]] = count;
    }
    let total_weight = counts
        .iter()
        .enumerate()
        .map(|(id, &count)| count * instance.item(id).weight)
        .sum();
    let solution = UKPSolution {
        counts,
        total_profit: best_profit,
        total_weight,
    };
    debug_assert!(assertions::solution_matches_instance(instance, &solution));
    Ok(solution)
}

/// Optimistic bound for the subtree rooted at `item`: with unlimited copies
/// allowed, the relaxation fills the whole remaining `slack` at the density of
/// the densest remaining item. Rounded up, so the bound never underestimates
/// the relaxation.
fn upper_bound(item: &Item, profit: u64, slack: u64) -> u128 {
    profit as u128 + (slack as u128 * item.profit as u128).div_ceil(item.weight as u128)
}

use crate::entities::{Instance, Item};
use crate::probs::kp01::entities::KPSolution;
use crate::probs::kp01::util::assertions;
use crate::util::sorting::density_sorted_ids;
use itertools::Itertools;
use log::debug;

/// State of the partial solution *before* including the item at `depth` of the
/// density-sorted order. Value object owned by the search stack, dropped on
/// backtrack.
#[derive(Clone, Copy, Debug)]
struct Node {
    depth: usize,
    profit: u64,
    slack: u64,
}

/// Solves a 0-1 knapsack instance to provable optimality by branch & bound.
///
/// Items heavier than the capacity are dropped up front, the rest is explored
/// depth-first in descending profit-density order (ties by id), include branch
/// first: a dive greedily includes every fitting item, which tends to produce
/// strong incumbents early. A subtree is pruned as soon as its
/// fractional-relaxation [`upper_bound`] cannot beat the incumbent, and the
/// incumbent is only replaced by a *strictly* better profit, so the
/// first-found solution wins ties just like in the dynamic programming solver.
///
/// Worst case exponential; uniform-density inputs degrade toward full
/// enumeration.
pub fn solve_bnb(instance: &Instance) -> KPSolution {
    let order = density_sorted_ids(instance);
    let sorted = order.iter().map(|&id| instance.item(id)).collect_vec();

    let mut best_profit = 0u64;
    let mut best_depths: Vec<usize> = vec![];

    //stack of included items; a node restores the state preceding its inclusion
    let mut stack: Vec<Node> = vec![];
    let mut depth = 0;
    let mut profit = 0u64;
    let mut slack = instance.capacity();
    let (mut n_nodes, mut n_pruned) = (0u64, 0u64);

    loop {
        //dive: include every fitting item until the bound collapses
        let mut pruned = false;
        while depth < sorted.len() {
            let item = &sorted[depth];
            if slack >= item.weight {
                if upper_bound(&sorted, depth, profit, slack) <= best_profit as u128 {
                    pruned = true;
                    n_pruned += 1;
                    break;
                }
                stack.push(Node {
                    depth,
                    profit,
                    slack,
                });
                n_nodes += 1;
                profit += item.profit;
                slack -= item.weight;
            }
            depth += 1;
        }

        //all items decided: strictly better profit replaces the incumbent
        if !pruned && profit > best_profit {
            best_profit = profit;
            best_depths = stack.iter().map(|node| node.depth).collect();
        }

        //backtrack: undo the latest inclusion and explore its exclude branch
        match stack.pop() {
            Some(node) => {
                profit = node.profit;
                slack = node.slack;
                depth = node.depth + 1;
            }
            None => break,
        }
    }

    debug!("[KP01-BNB] explored {n_nodes} nodes, pruned {n_pruned} subtrees");

    let items = best_depths.iter().map(|&d| order[d]).sorted().collect_vec();
    let total_weight = items.iter().map(|&id| instance.item(id).weight).sum();
    let solution = KPSolution {
        items,
        total_profit: best_profit,
        total_weight,
    };
    debug_assert!(assertions::solution_matches_instance(instance, &solution));
    solution
}

/// Optimistic bound for the subtree rooted at `depth`: fill the remaining
/// `slack` greedily with the density-sorted suffix, whole items while they
/// fit, then a fractional slice of the first item that does not. The
/// fractional term rounds up, so the bound never underestimates the true
/// relaxation and pruning never discards an optimal branch.
fn upper_bound(sorted: &[Item], depth: usize, profit: u64, slack: u64) -> u128 {
    let mut bound = profit as u128;
    let mut slack = slack as u128;
    for item in &sorted[depth..] {
        if item.weight as u128 > slack {
            return bound + (slack * item.profit as u128).div_ceil(item.weight as u128);
        }
        slack -= item.weight as u128;
        bound += item.profit as u128;
    }
    bound
}

use crate::entities::Instance;
use crate::probs::ukp::entities::UKPSolution;

//Checks to verify the correctness of solver output
//Used in debug_assert!() blocks

pub fn solution_matches_instance(instance: &Instance, solution: &UKPSolution) -> bool {
    let UKPSolution {
        counts,
        total_profit,
        total_weight,
    } = solution;

    assert_eq!(counts.len(), instance.len());

    let profit: u128 = counts
        .iter()
        .enumerate()
        .map(|(id, &count)| count as u128 * instance.item(id).profit as u128)
        .sum();
    let weight: u128 = counts
        .iter()
        .enumerate()
        .map(|(id, &count)| count as u128 * instance.item(id).weight as u128)
        .sum();
    assert_eq!(profit, *total_profit as u128);
    assert_eq!(weight, *total_weight as u128);
    assert!(weight <= instance.capacity() as u128);

    true
}

use crate::entities::Instance;
use crate::probs::kp01::entities::KPSolution;

//Checks to verify the correctness of solver output
//Used in debug_assert!() blocks

pub fn solution_matches_instance(instance: &Instance, solution: &KPSolution) -> bool {
    let KPSolution {
        items,
        total_profit,
        total_weight,
    } = solution;

    assert!(items.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(items.iter().all(|&id| id < instance.len()));

    let profit: u64 = items.iter().map(|&id| instance.item(id).profit).sum();
    let weight: u64 = items.iter().map(|&id| instance.item(id).weight).sum();
    assert_eq!(profit, *total_profit);
    assert_eq!(weight, *total_weight);
    assert!(weight <= instance.capacity());

    true
}

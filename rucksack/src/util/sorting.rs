use crate::entities::Instance;
use itertools::Itertools;

/// Ids of all items that fit the capacity on their own, sorted by profit
/// density descending; ties keep the lower id first so results are
/// reproducible regardless of the input order of equally dense items.
pub fn density_sorted_ids(instance: &Instance) -> Vec<usize> {
    (0..instance.len())
        .filter(|&id| instance.item(id).weight <= instance.capacity())
        .sorted_by(|&a, &b| {
            instance
                .item(b)
                .cmp_density(&instance.item(a))
                .then_with(|| a.cmp(&b))
        })
        .collect_vec()
}

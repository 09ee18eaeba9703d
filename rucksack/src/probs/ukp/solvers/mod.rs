use crate::entities::Instance;
use anyhow::{Result, ensure};

mod bnb;
mod dp;

#[doc(inline)]
pub use bnb::solve_bnb;
#[doc(inline)]
pub use dp::solve_dp;

/// The unbounded optimum only exists if no zero-weight item carries profit:
/// such an item could be taken indefinitely.
fn ensure_bounded_optimum(instance: &Instance) -> Result<()> {
    ensure!(
        instance
            .items()
            .iter()
            .all(|item| item.weight > 0 || item.profit == 0),
        "unbounded optimum: a zero-weight item with positive profit can be selected indefinitely"
    );
    Ok(())
}

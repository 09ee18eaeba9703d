mod bnb;
mod dp;

#[doc(inline)]
pub use bnb::solve_bnb;
#[doc(inline)]
pub use dp::solve_dp;

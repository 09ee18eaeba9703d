mod solution;

#[doc(inline)]
pub use solution::UKPSolution;

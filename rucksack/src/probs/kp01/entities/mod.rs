mod solution;

#[doc(inline)]
pub use solution::KPSolution;

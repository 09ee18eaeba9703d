/// Density-based item ordering shared by the branch & bound solvers
pub mod sorting;

/// Entities to model the 0-1 Knapsack Problem
pub mod entities;

/// Exact solvers for the 0-1 Knapsack Problem
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Entities to model the Unbounded Knapsack Problem
pub mod entities;

/// Exact solvers for the Unbounded Knapsack Problem
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;

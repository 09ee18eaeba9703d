//! Exact solvers for one-dimensional knapsack problems.
//!
//! Two problem variants share a single immutable problem model
//! ([`entities::Instance`]):
//! - [`probs::kp01`]: the 0-1 Knapsack Problem (KP01), every item selectable at most once;
//! - [`probs::ukp`]: the Unbounded Knapsack Problem (UKP), every item selectable any
//!   non-negative number of times.
//!
//! Each variant ships a dynamic programming solver and a branch & bound solver.
//! All solvers are pure functions of the instance: they run to provable optimality
//! on the calling thread, allocate only solver-local working memory, and can
//! therefore be run concurrently over shared instances without synchronization.

/// Entities to model knapsack problem instances (variant agnostic)
pub mod entities;

/// Problem variants and their solvers
pub mod probs;

/// Helper functions which do not belong to any specific module
pub mod util;

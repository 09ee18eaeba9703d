/// 0-1 Knapsack Problem (KP01) module
#[cfg(feature = "kp01")]
pub mod kp01;

/// Unbounded Knapsack Problem (UKP) module
#[cfg(feature = "ukp")]
pub mod ukp;

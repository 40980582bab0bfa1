//! Fraud labeling: timestamp derivation, window aggregation, and assembly.

pub mod assemble;
pub mod timestamp;
pub mod windows;

pub use assemble::assemble;
pub use timestamp::compute_timestamp;
pub use windows::{compute_fraud_windows, FraudWindow};

//! Type definitions for the labeling pipeline

pub mod schema;
pub mod table;

pub use schema::{FraudColumns, UntaggedColumns};
pub use table::Table;

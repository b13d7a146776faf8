//! Pulse Core Types
//!
//! This crate provides the foundational types used throughout Pulse:
//! - The validated clinic performance `Record`
//! - Field identifiers (`Dimension`, `Metric`)
//! - Dimension values (`DimValue`) used as grouping keys
//! - Common error types

mod error;
mod field;
mod record;
mod value;

pub use error::*;
pub use field::*;
pub use record::*;
pub use value::*;

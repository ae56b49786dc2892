//! Route filtering, carrier grouping and per-carrier statistics.
//!
//! Tickets on the configured route are grouped by carrier, then reduced to
//! the minimum flight time and the mean-minus-median price spread.

pub mod aggregate;
pub mod analyzer;
pub mod group;
pub mod types;
pub mod utility;

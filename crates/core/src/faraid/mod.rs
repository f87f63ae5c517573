//! Islamic inheritance (Fara'id) share distribution.
//!
//! This module implements:
//! - The heir taxonomy and declared heir counts
//! - Fixed Qur'anic fractions and share labels
//! - The distribution engine, including proportional reduction (ʿAwl)
//! - Largest-remainder allocation so split shares never lose a unit

pub mod allocation;
pub mod engine;
pub mod error;
pub mod heir;
pub mod types;

#[cfg(test)]
mod engine_props;
#[cfg(test)]
mod tests;

pub use engine::{DEFAULT_DECIMAL_PLACES, DistributionEngine, distribute};
pub use error::FaraidError;
pub use heir::{
    HeirCategory, HeirClaims, HeirGroup, HeirInfo, MAX_CLAIM_COUNT, SiblingLine, catalogue,
};
pub use types::{EstateInput, Fraction, MAX_ESTATE_AMOUNT, Share, ShareLabel, ShareResult};

//! Core business logic for Ishrakaat.
//!
//! This crate contains pure calculation rules with ZERO web or database
//! dependencies. Every function is deterministic and side-effect free, so
//! it can be called concurrently without coordination.
//!
//! # Modules
//!
//! - `zakah` - Wealth, livestock, crops and asset Zakah, Nisab derivation
//! - `faraid` - Islamic inheritance share distribution

pub mod faraid;
pub mod zakah;

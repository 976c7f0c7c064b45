//! Loft-keeping layer for loftsim.
//!
//! Owns what the pure genetics crate deliberately does not: named bird
//! records, the capacity-slotted loft, maturity/cooldown timing (driven by a
//! caller-supplied `now`, never a clock read), and save/load. All breeding
//! preconditions are enforced here before the inheritance engine runs.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`pigeon`] | Individual records, maturity/cooldown state machine |
//! | [`loft`] | Slot-array population, breeding orchestration, wild catches |
//! | [`names`] | Random bird names |
//! | [`persistence`] | Versioned JSON/bincode save and load |

pub mod loft;
pub mod names;
pub mod persistence;
pub mod pigeon;

//! Pure pigeon genetics for loftsim.
//!
//! This crate contains the whole genetic model and nothing else: no clock,
//! no I/O, no population bookkeeping. Genotypes are immutable values, every
//! resolver is a pure function, and every stochastic function takes
//! `rng: &mut impl Rng`, so concurrent breeding calls cannot interfere and
//! tests can inject a seeded source.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`alleles`] | Dominance-ordered allele tables for each locus |
//! | [`genotype`] | Complete genetic record, invariants, random founders |
//! | [`phenotype`] | Genotype → displayed color/pattern/modifier resolution |
//! | [`carriers`] | Hidden recessives an individual can transmit |
//! | [`breeding`] | Mendelian inheritance with ZW sex-linkage |

pub mod alleles;
pub mod breeding;
pub mod carriers;
pub mod genotype;
pub mod phenotype;

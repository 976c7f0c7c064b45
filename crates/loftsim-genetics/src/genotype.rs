//! Genotype — the complete genetic record of one bird.
//!
//! A genotype is fixed at hatch and never mutated afterward; breeding reads
//! two parent genotypes and returns a new one.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alleles::{
    DiluteAllele, FeatheringAllele, PatternAllele, RedAllele, SpreadAllele, ZAllele,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Ways a record can violate the sex-chromosome invariant. Out-of-alphabet
/// symbols cannot be represented at all — they are rejected when the record
/// is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenotypeError {
    /// A cock's Z pair contains the W placeholder.
    PlaceholderInCock,
    /// A hen's second slot holds a color allele instead of the placeholder.
    MissingPlaceholder,
    /// A hen's first slot is the placeholder, leaving no color allele.
    NoColorAllele,
}

impl fmt::Display for GenotypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::PlaceholderInCock => "cock genotype carries the W placeholder",
            Self::MissingPlaceholder => "hen genotype is missing the W placeholder",
            Self::NoColorAllele => "hen genotype has no color allele on Z",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for GenotypeError {}

/// Complete genetic record across all loci. Allele order within a pair is
/// insertion order and carries no meaning beyond "these are the two copies".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genotype {
    pub sex: Sex,
    /// Sex-chromosome pair. Cocks carry two color alleles; hens carry one
    /// color allele plus `W` in the second slot.
    pub z: [ZAllele; 2],
    pub pattern: [PatternAllele; 2],
    pub spread: [SpreadAllele; 2],
    pub dilute: [DiluteAllele; 2],
    pub recessive_red: [RedAllele; 2],
    pub foot_feathering: [FeatheringAllele; 2],
}

impl Genotype {
    /// Draw a uniformly random genotype — founder birds and wild catches.
    pub fn random(sex: Sex, rng: &mut impl Rng) -> Self {
        let z = match sex {
            Sex::Male => [random_color(rng), random_color(rng)],
            Sex::Female => [random_color(rng), ZAllele::W],
        };
        Self {
            sex,
            z,
            pattern: [
                draw(&PatternAllele::ALL, rng),
                draw(&PatternAllele::ALL, rng),
            ],
            spread: [random_spread(rng), random_spread(rng)],
            dilute: [random_dilute(rng), random_dilute(rng)],
            recessive_red: [random_red(rng), random_red(rng)],
            foot_feathering: [
                draw(&FeatheringAllele::ALL, rng),
                draw(&FeatheringAllele::ALL, rng),
            ],
        }
    }

    /// Check the sex-chromosome invariant.
    pub fn validate(&self) -> Result<(), GenotypeError> {
        match self.sex {
            Sex::Male => {
                if self.z.iter().any(|a| !a.is_color()) {
                    return Err(GenotypeError::PlaceholderInCock);
                }
            }
            Sex::Female => {
                if !self.z[0].is_color() {
                    return Err(GenotypeError::NoColorAllele);
                }
                if self.z[1] != ZAllele::W {
                    return Err(GenotypeError::MissingPlaceholder);
                }
            }
        }
        Ok(())
    }

    /// The real color alleles of the Z pair: two for cocks, one for hens.
    pub fn color_alleles(&self) -> impl Iterator<Item = ZAllele> + '_ {
        self.z.iter().copied().filter(|a| a.is_color())
    }
}

fn draw<T: Copy>(table: &[T], rng: &mut impl Rng) -> T {
    table[rng.gen_range(0..table.len())]
}

fn random_color(rng: &mut impl Rng) -> ZAllele {
    draw(&ZAllele::COLORS, rng)
}

fn random_spread(rng: &mut impl Rng) -> SpreadAllele {
    if rng.gen_bool(0.5) {
        SpreadAllele::Spread
    } else {
        SpreadAllele::WildType
    }
}

fn random_dilute(rng: &mut impl Rng) -> DiluteAllele {
    if rng.gen_bool(0.5) {
        DiluteAllele::Intense
    } else {
        DiluteAllele::Dilute
    }
}

fn random_red(rng: &mut impl Rng) -> RedAllele {
    if rng.gen_bool(0.5) {
        RedAllele::WildType
    } else {
        RedAllele::Red
    }
}

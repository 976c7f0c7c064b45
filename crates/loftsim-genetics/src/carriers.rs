//! Carrier analysis — hidden recessives a bird can pass on without showing.

use serde::{Deserialize, Serialize};

use crate::alleles::{RedAllele, ZAllele};
use crate::genotype::{Genotype, Sex};

/// A recessive trait present in the genotype but absent from the phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarriedTrait {
    /// Losing color allele of a heterozygous cock's Z pair.
    Color(ZAllele),
    /// A single `r` at the recessive red locus — transmissible, not shown.
    RecessiveRed,
}

impl CarriedTrait {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Color(allele) => allele.color_name(),
            Self::RecessiveRed => "Recessive red",
        }
    }
}

/// Hidden recessives carried by this bird, in display order. Empty means
/// nothing is hidden.
///
/// Hens never report a sex-linked carrier: with a single Z allele there is
/// nothing to hide, whatever the rest of the genotype says.
pub fn carried_recessives(genotype: &Genotype) -> Vec<CarriedTrait> {
    let mut carried = Vec::new();

    if genotype.sex == Sex::Male && genotype.z[0] != genotype.z[1] {
        carried.push(CarriedTrait::Color(ZAllele::recessive(
            genotype.z[0],
            genotype.z[1],
        )));
    }

    let red_count = genotype
        .recessive_red
        .iter()
        .filter(|a| **a == RedAllele::Red)
        .count();
    if red_count == 1 {
        carried.push(CarriedTrait::RecessiveRed);
    }

    carried
}

/// Render a carried-trait list for display; `"None"` when empty.
pub fn format_carried(carried: &[CarriedTrait]) -> String {
    if carried.is_empty() {
        "None".to_string()
    } else {
        carried
            .iter()
            .map(|c| c.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

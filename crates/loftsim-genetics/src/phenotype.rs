//! Phenotype resolution — what a genotype actually shows on the bird.
//!
//! Pure computation: recessive red masks first, then the dominant Z color,
//! then pattern and modifier evaluation. Display attributes are always
//! recomputed from the genotype, never stored as source of truth.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::alleles::{DiluteAllele, FeatheringAllele, PatternAllele, RedAllele, SpreadAllele, ZAllele};
use crate::genotype::{Genotype, GenotypeError};

/// Resolved base color, after recessive-red masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseColor {
    AshRed,
    Blue,
    Brown,
    RecessiveRed,
}

impl BaseColor {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::AshRed => "Ash red",
            Self::Blue => "Blue",
            Self::Brown => "Brown",
            Self::RecessiveRed => "Recessive red",
        }
    }
}

/// Display attributes derived from a genotype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phenotype {
    /// Sex-linked base color, before recessive-red masking. Still relevant
    /// for breeding when masked.
    pub primary_color: BaseColor,
    /// Base color as shown, with recessive red applied.
    pub base_color: BaseColor,
    pub pattern: PatternAllele,
    pub foot_feathering: FeatheringAllele,
    pub is_spread: bool,
    pub is_dilute: bool,
    pub is_recessive_red: bool,
    /// Composite human-readable description, e.g. `"Blue (Bar, Dilute)"`.
    pub displayed_color: String,
}

impl Phenotype {
    /// Resolve a genotype's display attributes.
    pub fn resolve(genotype: &Genotype) -> Result<Self, GenotypeError> {
        genotype.validate()?;

        // Hens contribute a single color allele; cocks resolve by dominance.
        let primary = genotype
            .color_alleles()
            .reduce(ZAllele::dominant)
            .ok_or(GenotypeError::NoColorAllele)?;
        let primary_color = match primary {
            ZAllele::AshRed => BaseColor::AshRed,
            ZAllele::Blue => BaseColor::Blue,
            ZAllele::Brown => BaseColor::Brown,
            ZAllele::W => return Err(GenotypeError::NoColorAllele),
        };

        let is_recessive_red = genotype.recessive_red.iter().all(|a| *a == RedAllele::Red);
        let base_color = if is_recessive_red {
            BaseColor::RecessiveRed
        } else {
            primary_color
        };

        let pattern = genotype.pattern[0].max(genotype.pattern[1]);
        let foot_feathering = genotype.foot_feathering[0].max(genotype.foot_feathering[1]);
        let is_spread = genotype.spread.contains(&SpreadAllele::Spread);
        let is_dilute = genotype.dilute.iter().all(|a| *a == DiluteAllele::Dilute);

        let displayed_color =
            compose_display(primary_color, pattern, is_spread, is_dilute, is_recessive_red);

        Ok(Self {
            primary_color,
            base_color,
            pattern,
            foot_feathering,
            is_spread,
            is_dilute,
            is_recessive_red,
            displayed_color,
        })
    }

    /// Resolve, substituting a safe default display for a malformed record so
    /// a bad save degrades on screen instead of failing the caller.
    pub fn resolve_or_default(genotype: &Genotype) -> Self {
        match Self::resolve(genotype) {
            Ok(phenotype) => phenotype,
            Err(err) => {
                warn!("invalid genotype ({err}); substituting fallback phenotype");
                Self::fallback()
            }
        }
    }

    pub fn pattern_display_name(&self) -> &'static str {
        self.pattern.display_name()
    }

    fn fallback() -> Self {
        Self {
            primary_color: BaseColor::Blue,
            base_color: BaseColor::Blue,
            pattern: PatternAllele::Bar,
            foot_feathering: FeatheringAllele::CleanLegged,
            is_spread: false,
            is_dilute: false,
            is_recessive_red: false,
            displayed_color: "Blue (Bar)".to_string(),
        }
    }
}

/// Base color, then pattern and active modifiers parenthesized in fixed
/// order {Spread, Dilute}. Recessive red overrides the leading name and
/// keeps the underlying color in the detail list.
fn compose_display(
    primary_color: BaseColor,
    pattern: PatternAllele,
    is_spread: bool,
    is_dilute: bool,
    is_recessive_red: bool,
) -> String {
    let mut details = vec![pattern.display_name()];
    if is_spread {
        details.push("Spread");
    }
    if is_dilute {
        details.push("Dilute");
    }
    let details = details.join(", ");

    if is_recessive_red {
        format!("Recessive Red ({}, {})", primary_color.display_name(), details)
    } else {
        format!("{} ({})", primary_color.display_name(), details)
    }
}

//! Allele tables — one dominance-ordered enum per genetic locus.
//!
//! Serde renames carry the letter symbols breeders write (`B+`, `b`, `T`…),
//! so a saved genotype round-trips the exact symbols.

use serde::{Deserialize, Serialize};

/// Pattern locus (autosomal). Variant order is dominance order, ascending:
/// Barless < Bar < Checker < T-check. The expressed allele of a pair is the
/// maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PatternAllele {
    #[serde(rename = "L")]
    Barless,
    #[serde(rename = "B")]
    Bar,
    #[serde(rename = "C")]
    Checker,
    #[serde(rename = "T")]
    TCheck,
}

impl PatternAllele {
    pub const ALL: [PatternAllele; 4] = [Self::Barless, Self::Bar, Self::Checker, Self::TCheck];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Barless => "Barless",
            Self::Bar => "Bar",
            Self::Checker => "Checker",
            Self::TCheck => "T-check",
        }
    }
}

/// Sex-linked color locus on the Z chromosome. Dominance descends in variant
/// order: Ash red > Blue > Brown. `W` is the hen's placeholder for her W
/// chromosome — it occupies a slot but is not a color allele.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZAllele {
    #[serde(rename = "B+")]
    AshRed,
    #[serde(rename = "B")]
    Blue,
    #[serde(rename = "b")]
    Brown,
    W,
}

impl ZAllele {
    /// The three real color alleles (excludes the placeholder).
    pub const COLORS: [ZAllele; 3] = [Self::AshRed, Self::Blue, Self::Brown];

    pub fn is_color(self) -> bool {
        !matches!(self, Self::W)
    }

    /// The more dominant of two color alleles (earlier variant wins).
    pub fn dominant(a: ZAllele, b: ZAllele) -> ZAllele {
        if (a as u8) <= (b as u8) {
            a
        } else {
            b
        }
    }

    /// The losing allele of a pair — what a heterozygous cock hides.
    pub fn recessive(a: ZAllele, b: ZAllele) -> ZAllele {
        if (a as u8) <= (b as u8) {
            b
        } else {
            a
        }
    }

    pub fn color_name(self) -> &'static str {
        match self {
            Self::AshRed => "Ash red",
            Self::Blue => "Blue",
            Self::Brown => "Brown",
            Self::W => "W",
        }
    }
}

/// Spread locus (autosomal). `S` is dominant-acting: one copy spreads the
/// base color over the whole body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpreadAllele {
    #[serde(rename = "S")]
    Spread,
    #[serde(rename = "s")]
    WildType,
}

/// Dilute locus (autosomal). Dilution shows only when both alleles are `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiluteAllele {
    #[serde(rename = "D")]
    Intense,
    #[serde(rename = "d")]
    Dilute,
}

/// Recessive red locus (autosomal). Homozygous `r r` paints the bird solid
/// red and masks the sex-linked color for display; the Z alleles underneath
/// are unchanged and still breed true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedAllele {
    #[serde(rename = "R")]
    WildType,
    #[serde(rename = "r")]
    Red,
}

/// Foot feathering locus (autosomal). Ascending dominance like the pattern
/// locus: the maximum of the pair is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeatheringAllele {
    #[serde(rename = "N")]
    CleanLegged,
    #[serde(rename = "S")]
    Stocking,
    #[serde(rename = "M")]
    MediumMuff,
    #[serde(rename = "L")]
    LongMuff,
    #[serde(rename = "F")]
    Fantail,
}

impl FeatheringAllele {
    pub const ALL: [FeatheringAllele; 5] = [
        Self::CleanLegged,
        Self::Stocking,
        Self::MediumMuff,
        Self::LongMuff,
        Self::Fantail,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::CleanLegged => "Clean-legged",
            Self::Stocking => "Stocking",
            Self::MediumMuff => "Medium muff",
            Self::LongMuff => "Long muff",
            Self::Fantail => "Fantail-type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_dominance_order() {
        assert!(PatternAllele::Barless < PatternAllele::Bar);
        assert!(PatternAllele::Bar < PatternAllele::Checker);
        assert!(PatternAllele::Checker < PatternAllele::TCheck);
        assert_eq!(
            PatternAllele::Barless.max(PatternAllele::TCheck),
            PatternAllele::TCheck
        );
    }

    #[test]
    fn test_z_dominance() {
        assert_eq!(
            ZAllele::dominant(ZAllele::Blue, ZAllele::AshRed),
            ZAllele::AshRed
        );
        assert_eq!(
            ZAllele::dominant(ZAllele::Brown, ZAllele::Blue),
            ZAllele::Blue
        );
        assert_eq!(
            ZAllele::recessive(ZAllele::Blue, ZAllele::Brown),
            ZAllele::Brown
        );
        // Symmetric in argument order
        assert_eq!(
            ZAllele::dominant(ZAllele::AshRed, ZAllele::Blue),
            ZAllele::dominant(ZAllele::Blue, ZAllele::AshRed)
        );
    }

    #[test]
    fn test_symbols_round_trip() {
        let json = serde_json::to_string(&ZAllele::AshRed).unwrap();
        assert_eq!(json, "\"B+\"");
        let back: ZAllele = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ZAllele::AshRed);

        assert_eq!(serde_json::to_string(&PatternAllele::TCheck).unwrap(), "\"T\"");
        assert_eq!(serde_json::to_string(&RedAllele::Red).unwrap(), "\"r\"");
        assert_eq!(serde_json::to_string(&SpreadAllele::WildType).unwrap(), "\"s\"");
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert!(serde_json::from_str::<PatternAllele>("\"X\"").is_err());
        assert!(serde_json::from_str::<ZAllele>("\"blue\"").is_err());
    }

    #[test]
    fn test_feathering_dominance() {
        assert_eq!(
            FeatheringAllele::CleanLegged.max(FeatheringAllele::Fantail),
            FeatheringAllele::Fantail
        );
        assert_eq!(
            FeatheringAllele::Stocking.max(FeatheringAllele::Stocking),
            FeatheringAllele::Stocking
        );
    }
}

//! Inheritance engine — Mendelian segregation with ZW sex-linkage.
//!
//! Total over valid opposite-sex genotype pairs; presence and capacity
//! preconditions belong to the caller. All randomness comes from the
//! injected `rng`, so a seeded source makes breeding reproducible.

use rand::Rng;

use crate::alleles::{RedAllele, ZAllele};
use crate::carriers::{carried_recessives, CarriedTrait};
use crate::genotype::{Genotype, Sex};

/// Uniform 50/50 sex determination, independent of every color locus.
pub fn determine_sex(rng: &mut impl Rng) -> Sex {
    if rng.gen_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    }
}

/// One uniformly-drawn allele from a parent's pair.
fn segregate<T: Copy>(pair: &[T; 2], rng: &mut impl Rng) -> T {
    pair[rng.gen_range(0..2)]
}

/// Produce an offspring genotype from a cock and a hen.
pub fn breed(sire: &Genotype, dam: &Genotype, rng: &mut impl Rng) -> Genotype {
    let sex = determine_sex(rng);
    Genotype {
        sex,
        z: inherit_z(sire, dam, sex, rng),
        pattern: [segregate(&sire.pattern, rng), segregate(&dam.pattern, rng)],
        spread: [segregate(&sire.spread, rng), segregate(&dam.spread, rng)],
        dilute: [segregate(&sire.dilute, rng), segregate(&dam.dilute, rng)],
        recessive_red: inherit_recessive_red(sire, dam, rng),
        foot_feathering: [
            segregate(&sire.foot_feathering, rng),
            segregate(&dam.foot_feathering, rng),
        ],
    }
}

/// ZW transmission: daughters take one of the sire's two Z alleles plus the
/// W placeholder; sons take one sire allele and the dam's single color
/// allele.
fn inherit_z(sire: &Genotype, dam: &Genotype, sex: Sex, rng: &mut impl Rng) -> [ZAllele; 2] {
    match sex {
        Sex::Female => [segregate(&sire.z, rng), ZAllele::W],
        Sex::Male => {
            let from_dam = dam.z[0];
            let hidden = carried_recessives(sire).into_iter().find_map(|t| match t {
                CarriedTrait::Color(allele) => Some(allele),
                _ => None,
            });
            // A cock hiding the dam's displayed color passes it at the same
            // 50/50 odds as any draw from his pair; the branch keeps the
            // carrier transmission path explicit.
            let from_sire = match hidden {
                Some(recessive) if recessive == from_dam => {
                    let displayed = ZAllele::dominant(sire.z[0], sire.z[1]);
                    if rng.gen_bool(0.5) {
                        displayed
                    } else {
                        recessive
                    }
                }
                _ => segregate(&sire.z, rng),
            };
            [from_sire, from_dam]
        }
    }
}

/// Recessive red segregation. A homozygous `r r` parent has only `r` to
/// give, so its contribution is forced; the other side draws normally.
fn inherit_recessive_red(sire: &Genotype, dam: &Genotype, rng: &mut impl Rng) -> [RedAllele; 2] {
    let homozygous = |g: &Genotype| g.recessive_red.iter().all(|a| *a == RedAllele::Red);
    if homozygous(sire) {
        [RedAllele::Red, segregate(&dam.recessive_red, rng)]
    } else if homozygous(dam) {
        [segregate(&sire.recessive_red, rng), RedAllele::Red]
    } else {
        [
            segregate(&sire.recessive_red, rng),
            segregate(&dam.recessive_red, rng),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alleles::{DiluteAllele, FeatheringAllele, PatternAllele, SpreadAllele};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sire() -> Genotype {
        Genotype {
            sex: Sex::Male,
            z: [ZAllele::Blue, ZAllele::Brown],
            pattern: [PatternAllele::Bar, PatternAllele::Bar],
            spread: [SpreadAllele::WildType, SpreadAllele::WildType],
            dilute: [DiluteAllele::Dilute, DiluteAllele::Dilute],
            recessive_red: [RedAllele::WildType, RedAllele::WildType],
            foot_feathering: [FeatheringAllele::CleanLegged, FeatheringAllele::CleanLegged],
        }
    }

    fn dam() -> Genotype {
        Genotype {
            sex: Sex::Female,
            z: [ZAllele::Brown, ZAllele::W],
            pattern: [PatternAllele::Barless, PatternAllele::TCheck],
            spread: [SpreadAllele::WildType, SpreadAllele::Spread],
            dilute: [DiluteAllele::Intense, DiluteAllele::Dilute],
            recessive_red: [RedAllele::WildType, RedAllele::Red],
            foot_feathering: [FeatheringAllele::Stocking, FeatheringAllele::LongMuff],
        }
    }

    #[test]
    fn test_offspring_are_valid() {
        let mut rng = StdRng::seed_from_u64(21);
        let (sire, dam) = (sire(), dam());
        for _ in 0..1000 {
            let child = breed(&sire, &dam, &mut rng);
            assert_eq!(child.validate(), Ok(()));
        }
    }

    #[test]
    fn test_daughters_have_placeholder_sons_do_not() {
        let mut rng = StdRng::seed_from_u64(22);
        let (sire, dam) = (sire(), dam());
        for _ in 0..1000 {
            let child = breed(&sire, &dam, &mut rng);
            match child.sex {
                Sex::Female => {
                    assert_eq!(child.z[1], ZAllele::W);
                    // Daughters' single Z comes from the sire
                    assert!(sire.z.contains(&child.z[0]));
                }
                Sex::Male => {
                    assert!(child.z.iter().all(|a| a.is_color()));
                    // Sons always get the dam's single color allele
                    assert_eq!(child.z[1], ZAllele::Brown);
                }
            }
        }
    }

    #[test]
    fn test_autosomal_alleles_come_from_parents() {
        let mut rng = StdRng::seed_from_u64(23);
        let (sire, dam) = (sire(), dam());
        for _ in 0..1000 {
            let child = breed(&sire, &dam, &mut rng);
            assert!(sire.pattern.contains(&child.pattern[0]));
            assert!(dam.pattern.contains(&child.pattern[1]));
            assert!(sire.foot_feathering.contains(&child.foot_feathering[0]));
            assert!(dam.foot_feathering.contains(&child.foot_feathering[1]));
        }
    }

    #[test]
    fn test_homozygous_red_parent_forces_one_allele() {
        let mut rng = StdRng::seed_from_u64(24);
        let mut red_sire = sire();
        red_sire.recessive_red = [RedAllele::Red, RedAllele::Red];
        for _ in 0..500 {
            let child = breed(&red_sire, &dam(), &mut rng);
            assert_eq!(child.recessive_red[0], RedAllele::Red);
        }

        let mut red_dam = dam();
        red_dam.recessive_red = [RedAllele::Red, RedAllele::Red];
        for _ in 0..500 {
            let child = breed(&sire(), &red_dam, &mut rng);
            assert_eq!(child.recessive_red[1], RedAllele::Red);
        }
    }

    #[test]
    fn test_two_red_parents_always_breed_red() {
        let mut rng = StdRng::seed_from_u64(25);
        let mut red_sire = sire();
        red_sire.recessive_red = [RedAllele::Red, RedAllele::Red];
        let mut red_dam = dam();
        red_dam.recessive_red = [RedAllele::Red, RedAllele::Red];
        for _ in 0..200 {
            let child = breed(&red_sire, &red_dam, &mut rng);
            assert_eq!(child.recessive_red, [RedAllele::Red, RedAllele::Red]);
        }
    }

    #[test]
    fn test_carrier_cock_passes_hidden_color_to_sons() {
        // Blue cock carrying brown, bred to a brown hen: the carrier branch
        // is taken, and brown sons must appear at a healthy rate.
        let mut rng = StdRng::seed_from_u64(26);
        let (sire, dam) = (sire(), dam());
        let mut brown_sons = 0u32;
        let mut sons = 0u32;
        for _ in 0..4000 {
            let child = breed(&sire, &dam, &mut rng);
            if child.sex == Sex::Male {
                sons += 1;
                if child.z == [ZAllele::Brown, ZAllele::Brown] {
                    brown_sons += 1;
                }
            }
        }
        assert!(sons > 1500);
        // Expected ~50% of sons; allow a wide statistical margin
        let rate = brown_sons as f64 / sons as f64;
        assert!(rate > 0.4 && rate < 0.6, "brown son rate {rate}");
    }

    #[test]
    fn test_determine_sex_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(27);
        let males = (0..10_000)
            .filter(|_| determine_sex(&mut rng) == Sex::Male)
            .count();
        assert!((4700..=5300).contains(&males), "male count {males}");
    }
}

//! Integration tests for the inheritance engine's distributions.
//!
//! Fixed parents, seeded RNG, large samples: sex ratio, per-locus parental
//! allele frequencies, sex-linked transmission, and the carrier branch's
//! equivalence with plain uniform pair sampling.

use loftsim_genetics::alleles::{
    DiluteAllele, FeatheringAllele, PatternAllele, RedAllele, SpreadAllele, ZAllele,
};
use loftsim_genetics::breeding::breed;
use loftsim_genetics::carriers::{carried_recessives, CarriedTrait};
use loftsim_genetics::genotype::{Genotype, Sex};
use loftsim_genetics::phenotype::{BaseColor, Phenotype};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Fixed parents (the worked end-to-end pair) ─────────────────────────

fn blue_carrier_cock() -> Genotype {
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

fn brown_hen() -> Genotype {
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

const BROODS: usize = 10_000;

#[test]
fn worked_example_parent_phenotypes() {
    let sire_phenotype = Phenotype::resolve(&blue_carrier_cock()).unwrap();
    assert_eq!(sire_phenotype.displayed_color, "Blue (Bar, Dilute)");
    assert_eq!(
        carried_recessives(&blue_carrier_cock()),
        vec![CarriedTrait::Color(ZAllele::Brown)]
    );

    let dam_phenotype = Phenotype::resolve(&brown_hen()).unwrap();
    assert_eq!(dam_phenotype.base_color, BaseColor::Brown);
    assert_eq!(dam_phenotype.pattern, PatternAllele::TCheck);
    assert!(dam_phenotype.is_spread);
    assert!(carried_recessives(&brown_hen()).contains(&CarriedTrait::RecessiveRed));
}

#[test]
fn sex_ratio_is_near_uniform() {
    let mut rng = StdRng::seed_from_u64(101);
    let (sire, dam) = (blue_carrier_cock(), brown_hen());
    let males = (0..BROODS)
        .filter(|_| breed(&sire, &dam, &mut rng).sex == Sex::Male)
        .count();
    let ratio = males as f64 / BROODS as f64;
    assert!((0.47..0.53).contains(&ratio), "male ratio {ratio}");
}

#[test]
fn autosomal_alleles_segregate_at_half() {
    // Dam is heterozygous at pattern, spread, dilute, recessive red and
    // foot feathering; each of her alleles should reach offspring ~50%.
    let mut rng = StdRng::seed_from_u64(102);
    let (sire, dam) = (blue_carrier_cock(), brown_hen());

    let mut tcheck_from_dam = 0usize;
    let mut spread_from_dam = 0usize;
    let mut dilute_from_dam = 0usize;
    let mut red_from_dam = 0usize;
    for _ in 0..BROODS {
        let child = breed(&sire, &dam, &mut rng);
        if child.pattern[1] == PatternAllele::TCheck {
            tcheck_from_dam += 1;
        }
        if child.spread[1] == SpreadAllele::Spread {
            spread_from_dam += 1;
        }
        if child.dilute[1] == DiluteAllele::Dilute {
            dilute_from_dam += 1;
        }
        if child.recessive_red[1] == RedAllele::Red {
            red_from_dam += 1;
        }
    }

    for (label, count) in [
        ("T-check", tcheck_from_dam),
        ("Spread", spread_from_dam),
        ("dilute", dilute_from_dam),
        ("red", red_from_dam),
    ] {
        let freq = count as f64 / BROODS as f64;
        assert!((0.46..0.54).contains(&freq), "{label} frequency {freq}");
    }
}

#[test]
fn sex_linked_transmission() {
    let mut rng = StdRng::seed_from_u64(103);
    let (sire, dam) = (blue_carrier_cock(), brown_hen());

    let mut daughter_blue = 0usize;
    let mut daughters = 0usize;
    for _ in 0..BROODS {
        let child = breed(&sire, &dam, &mut rng);
        match child.sex {
            Sex::Female => {
                daughters += 1;
                assert_eq!(child.z[1], ZAllele::W);
                assert!(sire.z.contains(&child.z[0]));
                if child.z[0] == ZAllele::Blue {
                    daughter_blue += 1;
                }
            }
            Sex::Male => {
                // Dam's single allele, always
                assert_eq!(child.z[1], ZAllele::Brown);
            }
        }
    }
    // Daughters draw uniformly from the sire's pair
    let freq = daughter_blue as f64 / daughters as f64;
    assert!((0.46..0.54).contains(&freq), "blue daughter frequency {freq}");
}

#[test]
fn carrier_branch_matches_uniform_sampling() {
    // The explicit carrier branch (sire hides the dam's color) must hand the
    // sire's displayed and hidden alleles to sons at the same 50/50 rate a
    // plain draw from his pair would.
    let mut rng = StdRng::seed_from_u64(104);
    let (sire, dam) = (blue_carrier_cock(), brown_hen());

    let mut sons = 0usize;
    let mut brown_sons = 0usize;
    for _ in 0..BROODS {
        let child = breed(&sire, &dam, &mut rng);
        if child.sex == Sex::Male {
            sons += 1;
            if child.z[0] == ZAllele::Brown {
                brown_sons += 1;
            }
        }
    }
    assert!(brown_sons > 0, "carrier cock never passed his hidden color");
    let rate = brown_sons as f64 / sons as f64;
    assert!((0.45..0.55).contains(&rate), "hidden-allele rate {rate}");
}

#[test]
fn non_carrier_pairing_skips_the_branch_cleanly() {
    // Ash red/blue cock over a brown hen: he does not carry her color, so
    // sons draw plainly from his pair.
    let mut rng = StdRng::seed_from_u64(105);
    let mut sire = blue_carrier_cock();
    sire.z = [ZAllele::AshRed, ZAllele::Blue];
    let dam = brown_hen();

    let mut sons = 0usize;
    let mut ash_red_sons = 0usize;
    for _ in 0..BROODS {
        let child = breed(&sire, &dam, &mut rng);
        if child.sex == Sex::Male {
            sons += 1;
            assert!(sire.z.contains(&child.z[0]));
            if child.z[0] == ZAllele::AshRed {
                ash_red_sons += 1;
            }
        }
    }
    let rate = ash_red_sons as f64 / sons as f64;
    assert!((0.45..0.55).contains(&rate), "ash red rate {rate}");
}

#[test]
fn offspring_phenotypes_always_resolve() {
    let mut rng = StdRng::seed_from_u64(106);
    let (sire, dam) = (blue_carrier_cock(), brown_hen());
    for _ in 0..2_000 {
        let child = breed(&sire, &dam, &mut rng);
        assert!(Phenotype::resolve(&child).is_ok());
    }
}

//! loftsim Headless Validation Harness
//!
//! Sweeps the genetics model and loft logic entirely in-process — no UI, no
//! persistence host, no clock. Distribution checks run on a fixed seed so a
//! regression shows up as a hard failure, not flakiness.
//!
//! Usage:
//!   cargo run -p loftsim-simtest
//!   cargo run -p loftsim-simtest -- --verbose

use loftsim_core::loft::{BroodOutcome, Loft, LoftError};
use loftsim_core::persistence;
use loftsim_core::pigeon::{BREED_COOLDOWN_MS, MATURATION_MS};
use loftsim_genetics::alleles::{
    DiluteAllele, FeatheringAllele, PatternAllele, RedAllele, SpreadAllele, ZAllele,
};
use loftsim_genetics::breeding::{breed, determine_sex};
use loftsim_genetics::carriers::{carried_recessives, format_carried, CarriedTrait};
use loftsim_genetics::genotype::{Genotype, Sex};
use loftsim_genetics::phenotype::{BaseColor, Phenotype};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED: u64 = 0x1907;
const BROODS: usize = 10_000;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== loftsim Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Phenotype resolution
    results.extend(validate_phenotypes());

    // 2. Carrier analysis
    results.extend(validate_carriers());

    // 3. Inheritance distributions
    results.extend(validate_inheritance());

    // 4. Loft lifecycle
    results.extend(validate_loft());

    // 5. Persistence round-trip
    results.extend(validate_persistence());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Fixed parents (the worked end-to-end pair) ──────────────────────────

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

// ── 1. Phenotype resolution ─────────────────────────────────────────────

fn validate_phenotypes() -> Vec<TestResult> {
    println!("--- Phenotype Resolution ---");
    let mut results = Vec::new();

    let sire = Phenotype::resolve(&blue_carrier_cock()).expect("valid cock genotype");
    results.push(check(
        "worked_example_display",
        sire.displayed_color == "Blue (Bar, Dilute)",
        format!("cock displays as {:?}", sire.displayed_color),
    ));

    let dam = Phenotype::resolve(&brown_hen()).expect("valid hen genotype");
    results.push(check(
        "hen_single_allele_color",
        dam.base_color == BaseColor::Brown && dam.pattern == PatternAllele::TCheck,
        format!("hen is {} {}", dam.base_color.display_name(), dam.pattern_display_name()),
    ));

    let mut red = blue_carrier_cock();
    red.recessive_red = [RedAllele::Red, RedAllele::Red];
    let red_phenotype = Phenotype::resolve(&red).expect("valid genotype");
    results.push(check(
        "recessive_red_masks",
        red_phenotype.base_color == BaseColor::RecessiveRed
            && red_phenotype.primary_color == BaseColor::Blue
            && red_phenotype.displayed_color.starts_with("Recessive Red ("),
        format!("masked display {:?}", red_phenotype.displayed_color),
    ));

    // Exhaustive pairwise pattern dominance
    let mut pattern_ok = true;
    for a in PatternAllele::ALL {
        for b in PatternAllele::ALL {
            let mut genotype = blue_carrier_cock();
            genotype.pattern = [a, b];
            let phenotype = Phenotype::resolve(&genotype).expect("valid genotype");
            if phenotype.pattern != a.max(b) {
                pattern_ok = false;
            }
        }
    }
    results.push(check(
        "pattern_pair_dominance",
        pattern_ok,
        "all 16 pattern pairs resolve to the dominant allele".into(),
    ));

    let mut invalid = blue_carrier_cock();
    invalid.z = [ZAllele::W, ZAllele::W];
    results.push(check(
        "invalid_genotype_degrades",
        Phenotype::resolve(&invalid).is_err()
            && Phenotype::resolve_or_default(&invalid).displayed_color == "Blue (Bar)",
        "malformed record falls back to default display".into(),
    ));

    results
}

// ── 2. Carrier analysis ─────────────────────────────────────────────────

fn validate_carriers() -> Vec<TestResult> {
    println!("--- Carrier Analysis ---");
    let mut results = Vec::new();

    let carried = carried_recessives(&blue_carrier_cock());
    results.push(check(
        "carrier_cock_reports_brown",
        carried == vec![CarriedTrait::Color(ZAllele::Brown)],
        format!("cock carries: {}", format_carried(&carried)),
    ));

    let carried = carried_recessives(&brown_hen());
    results.push(check(
        "hen_reports_only_red",
        carried == vec![CarriedTrait::RecessiveRed],
        format!("hen carries: {}", format_carried(&carried)),
    ));

    let mut clean = blue_carrier_cock();
    clean.z = [ZAllele::Blue, ZAllele::Blue];
    results.push(check(
        "homozygous_cock_carries_none",
        format_carried(&carried_recessives(&clean)) == "None",
        "no hidden recessives renders as None".into(),
    ));

    results
}

// ── 3. Inheritance distributions ────────────────────────────────────────

fn validate_inheritance() -> Vec<TestResult> {
    println!("--- Inheritance Distributions ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(SEED);
    let (sire, dam) = (blue_carrier_cock(), brown_hen());

    let males = (0..BROODS)
        .filter(|_| determine_sex(&mut rng) == Sex::Male)
        .count();
    let ratio = males as f64 / BROODS as f64;
    results.push(check(
        "sex_ratio_uniform",
        (0.47..0.53).contains(&ratio),
        format!("male ratio {ratio:.3} over {BROODS} draws"),
    ));

    let mut placeholder_ok = true;
    let mut sons = 0usize;
    let mut brown_sons = 0usize;
    let mut tcheck_from_dam = 0usize;
    for _ in 0..BROODS {
        let child = breed(&sire, &dam, &mut rng);
        match child.sex {
            Sex::Female => {
                if child.z[1] != ZAllele::W || !child.z[0].is_color() {
                    placeholder_ok = false;
                }
            }
            Sex::Male => {
                sons += 1;
                if child.z.iter().any(|a| !a.is_color()) {
                    placeholder_ok = false;
                }
                if child.z[0] == ZAllele::Brown {
                    brown_sons += 1;
                }
            }
        }
        if child.pattern[1] == PatternAllele::TCheck {
            tcheck_from_dam += 1;
        }
    }
    results.push(check(
        "placeholder_invariant",
        placeholder_ok,
        "daughters always carry W, sons never".into(),
    ));

    let brown_rate = brown_sons as f64 / sons as f64;
    results.push(check(
        "carrier_transmission",
        brown_sons > 0 && (0.45..0.55).contains(&brown_rate),
        format!("hidden brown reached {brown_rate:.3} of {sons} sons"),
    ));

    let tcheck_rate = tcheck_from_dam as f64 / BROODS as f64;
    results.push(check(
        "autosomal_segregation",
        (0.46..0.54).contains(&tcheck_rate),
        format!("dam's T-check allele at {tcheck_rate:.3}"),
    ));

    let mut red_sire = sire;
    red_sire.recessive_red = [RedAllele::Red, RedAllele::Red];
    let forced = (0..1_000).all(|_| {
        breed(&red_sire, &dam, &mut rng).recessive_red[0] == RedAllele::Red
    });
    results.push(check(
        "homozygous_red_forcing",
        forced,
        "rr parent always contributes r".into(),
    ));

    results
}

// ── 4. Loft lifecycle ───────────────────────────────────────────────────

fn validate_loft() -> Vec<TestResult> {
    println!("--- Loft Lifecycle ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(SEED + 1);

    let mut loft = Loft::with_founders(10, &mut rng);
    let mut sire_id = 0;
    let mut dam_id = 0;
    for bird in loft.iter() {
        match bird.sex() {
            Sex::Male => sire_id = bird.id,
            Sex::Female => dam_id = bird.id,
        }
    }
    results.push(check(
        "founder_pair",
        loft.population() == 2 && sire_id != 0 && dam_id != 0,
        "fresh loft seeds one cock and one hen".into(),
    ));

    let ids = loop {
        match loft
            .breed_pair(sire_id, dam_id, 0, &mut rng)
            .expect("preconditions hold")
        {
            BroodOutcome::Hatched(ids) => break ids,
            BroodOutcome::NoEggs => {}
        }
    };
    let squabs_ok = ids
        .iter()
        .all(|id| loft.get(*id).map_or(false, |p| !p.is_adult()));
    results.push(check(
        "clutch_hatches_squabs",
        !ids.is_empty() && ids.len() <= 2 && squabs_ok,
        format!("{} squab(s) hatched", ids.len()),
    ));

    let on_cooldown =
        loft.breed_pair(sire_id, dam_id, 0, &mut rng) == Err(LoftError::HenOnCooldown(dam_id));
    loft.tick(BREED_COOLDOWN_MS);
    let recovered = loft
        .get(dam_id)
        .map_or(false, |hen| hen.is_breedable(BREED_COOLDOWN_MS));
    results.push(check(
        "hen_cooldown_cycle",
        on_cooldown && recovered,
        "hen blocks while cooling down, recovers on tick".into(),
    ));

    loft.tick(MATURATION_MS);
    let matured = ids
        .iter()
        .all(|id| loft.get(*id).map_or(false, |p| p.is_adult()));
    results.push(check(
        "squabs_mature_on_tick",
        matured,
        "maturation deadline promotes squabs".into(),
    ));

    while loft.population() < loft.capacity() {
        loft.add_wild_catch(&mut rng).expect("space remains");
    }
    results.push(check(
        "full_loft_refuses",
        loft.add_wild_catch(&mut rng) == Err(LoftError::LoftFull)
            && loft.breed_pair(sire_id, dam_id, BREED_COOLDOWN_MS, &mut rng)
                == Err(LoftError::LoftFull),
        "capacity gates both catches and breeding".into(),
    ));

    results
}

// ── 5. Persistence round-trip ───────────────────────────────────────────

fn validate_persistence() -> Vec<TestResult> {
    println!("--- Persistence ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(SEED + 2);

    let mut loft = Loft::with_founders(20, &mut rng);
    for _ in 0..10 {
        loft.add_wild_catch(&mut rng).expect("space remains");
    }

    let json = persistence::to_json(&loft).expect("serializable");
    let restored = persistence::from_json(&json).expect("parseable");
    let phenotypes_match = loft.iter().all(|bird| {
        restored
            .get(bird.id)
            .map_or(false, |back| back.phenotype() == bird.phenotype())
    });
    results.push(check(
        "json_round_trip",
        restored.population() == loft.population() && phenotypes_match,
        format!("{} birds round-trip with identical phenotypes", loft.population()),
    ));

    let mut buf = Vec::new();
    persistence::save_binary(&loft, &mut buf).expect("serializable");
    let restored = persistence::load_binary(buf.as_slice()).expect("parseable");
    results.push(check(
        "binary_round_trip",
        restored.population() == loft.population(),
        format!("{} byte snapshot", buf.len()),
    ));

    results
}

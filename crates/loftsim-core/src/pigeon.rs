//! Individual bird records and the maturity/cooldown state machine.
//!
//! Timing is driven entirely by a caller-supplied `now` in epoch
//! milliseconds; the core never reads a clock. The genotype is fixed at
//! hatch — only name and timing state change over a bird's lifetime.

use rand::Rng;
use serde::{Deserialize, Serialize};

use loftsim_genetics::carriers::{carried_recessives, format_carried};
use loftsim_genetics::genotype::{Genotype, Sex};
use loftsim_genetics::phenotype::Phenotype;

/// Fixed squab-to-adult maturation delay, milliseconds.
pub const MATURATION_MS: u64 = 3_600_000;
/// Fixed hen cooldown after a successful pairing, milliseconds.
pub const BREED_COOLDOWN_MS: u64 = 3_600_000;

/// Sale price of an adult bird, in coins.
pub const ADULT_SELL_VALUE: u32 = 5;
/// Squabs sell below adult valuation.
pub const SQUAB_SELL_VALUE: u32 = 2;

/// Chance a generated bird hatches with a head crest.
const CREST_CHANCE: f64 = 0.1;

/// Life stage. Squabs cannot breed and do not fetch adult valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeStage {
    Squab,
    Adult,
}

/// Non-owning lineage pointers, captured once at hatch. Ids only — never
/// traversed for mutation, so pedigrees stay acyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parentage {
    pub sire_id: u64,
    pub dam_id: u64,
}

/// One bird in the loft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pigeon {
    pub id: u64,
    pub name: String,
    pub genotype: Genotype,
    pub stage: LifeStage,
    /// When a squab becomes an adult (epoch ms). `None` once grown.
    pub matures_at: Option<u64>,
    /// Hen breeding-cooldown deadline (epoch ms). `None` = ready.
    pub cooldown_until: Option<u64>,
    pub parents: Option<Parentage>,
    /// Cosmetic head crest, rolled once at creation.
    pub crested: bool,
}

impl Pigeon {
    /// A newly hatched squab with its lineage recorded.
    pub fn hatched(
        id: u64,
        name: String,
        genotype: Genotype,
        parents: Parentage,
        now: u64,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            id,
            name,
            genotype,
            stage: LifeStage::Squab,
            matures_at: Some(now + MATURATION_MS),
            cooldown_until: None,
            parents: Some(parents),
            crested: rng.gen_bool(CREST_CHANCE),
        }
    }

    /// A founder or wild-caught adult with no recorded lineage.
    pub fn adult(id: u64, name: String, genotype: Genotype, rng: &mut impl Rng) -> Self {
        Self {
            id,
            name,
            genotype,
            stage: LifeStage::Adult,
            matures_at: None,
            cooldown_until: None,
            parents: None,
            crested: rng.gen_bool(CREST_CHANCE),
        }
    }

    pub fn sex(&self) -> Sex {
        self.genotype.sex
    }

    /// Display attributes, recomputed from the genotype (never cached as
    /// source of truth). Malformed records degrade to a default display.
    pub fn phenotype(&self) -> Phenotype {
        Phenotype::resolve_or_default(&self.genotype)
    }

    /// Hidden recessives for the detail view; `"None"` when clean.
    pub fn carried_display(&self) -> String {
        format_carried(&carried_recessives(&self.genotype))
    }

    pub fn is_adult(&self) -> bool {
        self.stage == LifeStage::Adult
    }

    /// Advance timed state: promote matured squabs, expire cooldowns.
    pub fn tick(&mut self, now: u64) {
        if let Some(deadline) = self.matures_at {
            if now >= deadline {
                self.grow();
            }
        }
        if let Some(deadline) = self.cooldown_until {
            if now >= deadline {
                self.cooldown_until = None;
            }
        }
    }

    /// Immediate squab-to-adult promotion (external "grow" action).
    pub fn grow(&mut self) {
        self.stage = LifeStage::Adult;
        self.matures_at = None;
    }

    /// Start the fixed post-breeding cooldown (hen role).
    pub fn start_cooldown(&mut self, now: u64) {
        self.cooldown_until = Some(now + BREED_COOLDOWN_MS);
    }

    /// Immediate cooldown removal (external "clear cooldown" action).
    pub fn clear_cooldown(&mut self) {
        self.cooldown_until = None;
    }

    /// Whether this bird is eligible to breed right now.
    pub fn is_breedable(&self, now: u64) -> bool {
        self.is_adult() && self.cooldown_until.map_or(true, |deadline| deadline <= now)
    }

    pub fn sell_value(&self) -> u32 {
        match self.stage {
            LifeStage::Squab => SQUAB_SELL_VALUE,
            LifeStage::Adult => ADULT_SELL_VALUE,
        }
    }
}

//! Loft population — fixed-capacity bird storage and breeding orchestration.
//!
//! The loft owns the precondition checks the inheritance engine assumes:
//! both parents present, opposite sexes, adult, hen off cooldown, space for
//! the clutch. The engine itself is total over valid pairs.

use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use loftsim_genetics::breeding::{breed, determine_sex};
use loftsim_genetics::genotype::{Genotype, Sex};

use crate::names::random_name;
use crate::pigeon::{Parentage, Pigeon};

/// Default loft capacity.
pub const DEFAULT_CAPACITY: usize = 50;

/// Chance a pairing produces a clutch at all.
const BREED_SUCCESS_CHANCE: f64 = 0.7;

/// Why a breeding request was refused before the inheritance engine ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoftError {
    NoSuchBird(u64),
    NotOppositeSexes,
    NotAdult(u64),
    HenOnCooldown(u64),
    LoftFull,
}

impl fmt::Display for LoftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchBird(id) => write!(f, "no bird with id {id}"),
            Self::NotOppositeSexes => write!(f, "pairing requires one cock and one hen"),
            Self::NotAdult(id) => write!(f, "bird {id} is still a squab"),
            Self::HenOnCooldown(id) => write!(f, "hen {id} is on breeding cooldown"),
            Self::LoftFull => write!(f, "loft is at capacity"),
        }
    }
}

impl std::error::Error for LoftError {}

/// Outcome of a pairing attempt that passed all preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroodOutcome {
    /// The pairing produced no eggs this time.
    NoEggs,
    /// Ids of the hatched squabs (1–2; fewer if the loft filled mid-clutch).
    Hatched(Vec<u64>),
}

/// Fixed-capacity slot array of birds, addressed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loft {
    slots: Vec<Option<Pigeon>>,
    next_id: u64,
}

impl Loft {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            next_id: 1,
        }
    }

    /// A fresh loft seeded with one adult cock and one adult hen.
    pub fn with_founders(capacity: usize, rng: &mut impl Rng) -> Self {
        let mut loft = Self::new(capacity);
        for sex in [Sex::Male, Sex::Female] {
            let id = loft.alloc_id();
            let genotype = Genotype::random(sex, rng);
            let founder = Pigeon::adult(id, random_name(rng), genotype, rng);
            // A fresh loft always has room for two
            let _ = loft.add(founder);
        }
        loft
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn population(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn get(&self, id: u64) -> Option<&Pigeon> {
        self.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Pigeon> {
        self.slots
            .iter_mut()
            .filter_map(|s| s.as_mut())
            .find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pigeon> {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    /// Place a bird in the first free slot.
    pub fn add(&mut self, pigeon: Pigeon) -> Result<(), LoftError> {
        match self.slots.iter_mut().find(|s| s.is_none()) {
            Some(slot) => {
                *slot = Some(pigeon);
                Ok(())
            }
            None => Err(LoftError::LoftFull),
        }
    }

    /// Add a wild-caught bird: random sex, random genotype.
    pub fn add_wild_catch(&mut self, rng: &mut impl Rng) -> Result<u64, LoftError> {
        if self.population() >= self.capacity() {
            return Err(LoftError::LoftFull);
        }
        let id = self.alloc_id();
        let sex = determine_sex(rng);
        let genotype = Genotype::random(sex, rng);
        let bird = Pigeon::adult(id, random_name(rng), genotype, rng);
        self.add(bird)?;
        Ok(id)
    }

    /// Remove a bird and return its sale value.
    pub fn sell(&mut self, id: u64) -> Option<u32> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.as_ref().map_or(false, |p| p.id == id))?;
        let bird = slot.take()?;
        Some(bird.sell_value())
    }

    /// Advance every bird's timed state.
    pub fn tick(&mut self, now: u64) {
        for slot in &mut self.slots {
            if let Some(bird) = slot {
                bird.tick(now);
            }
        }
    }

    /// External "grow" action: promote a squab immediately.
    pub fn grow(&mut self, id: u64) -> Result<(), LoftError> {
        let bird = self.get_mut(id).ok_or(LoftError::NoSuchBird(id))?;
        bird.grow();
        Ok(())
    }

    /// External "clear cooldown" action.
    pub fn clear_cooldown(&mut self, id: u64) -> Result<(), LoftError> {
        let bird = self.get_mut(id).ok_or(LoftError::NoSuchBird(id))?;
        bird.clear_cooldown();
        Ok(())
    }

    /// Pair a cock and a hen. On success the hen enters cooldown and a 1–2
    /// egg clutch hatches into free slots.
    pub fn breed_pair(
        &mut self,
        sire_id: u64,
        dam_id: u64,
        now: u64,
        rng: &mut impl Rng,
    ) -> Result<BroodOutcome, LoftError> {
        let sire = self.get(sire_id).ok_or(LoftError::NoSuchBird(sire_id))?;
        let dam = self.get(dam_id).ok_or(LoftError::NoSuchBird(dam_id))?;

        if sire.sex() != Sex::Male || dam.sex() != Sex::Female {
            return Err(LoftError::NotOppositeSexes);
        }
        if !sire.is_adult() {
            return Err(LoftError::NotAdult(sire_id));
        }
        if !dam.is_adult() {
            return Err(LoftError::NotAdult(dam_id));
        }
        if !dam.is_breedable(now) {
            return Err(LoftError::HenOnCooldown(dam_id));
        }
        if self.population() >= self.capacity() {
            return Err(LoftError::LoftFull);
        }

        // Genotypes are immutable values; copy them out before mutating.
        let sire_genotype = sire.genotype;
        let dam_genotype = dam.genotype;

        if !rng.gen_bool(BREED_SUCCESS_CHANCE) {
            return Ok(BroodOutcome::NoEggs);
        }

        if let Some(dam) = self.get_mut(dam_id) {
            dam.start_cooldown(now);
        }

        let clutch = if rng.gen_bool(0.5) { 1 } else { 2 };
        let mut hatched = Vec::with_capacity(clutch);
        for _ in 0..clutch {
            let id = self.alloc_id();
            let child = breed(&sire_genotype, &dam_genotype, rng);
            let squab = Pigeon::hatched(
                id,
                random_name(rng),
                child,
                Parentage { sire_id, dam_id },
                now,
                rng,
            );
            if self.add(squab).is_err() {
                warn!("loft full; clutch truncated to {} egg(s)", hatched.len());
                break;
            }
            hatched.push(id);
        }
        info!(
            "pair {sire_id}x{dam_id} hatched {} squab(s)",
            hatched.len()
        );
        Ok(BroodOutcome::Hatched(hatched))
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for Loft {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

//! Hiring DNA Step
//!
//! A fixed list of traits. Once `REQUIRED_TRAITS` are selected the set is
//! locked at that size: a selection must be swapped, not grown or shrunk.

use serde::{Deserialize, Serialize};

use crate::entity::{find_by_id, Entity};
use crate::error::{DomainError, DomainResult};

/// Size of the selected-trait set
pub const REQUIRED_TRAITS: usize = 5;

pub const TRAIT_WEIGHT_MIN: u8 = 0;
pub const TRAIT_WEIGHT_MAX: u8 = 100;
pub const TRAIT_WEIGHT_STEP: u8 = 5;

/// A behavioral attribute; `name` and `description` are catalog keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub weight: u8,
    pub selected: bool,
}

impl Trait {
    fn sample(id: u32, key: &str, weight: u8, selected: bool) -> Self {
        Self {
            id,
            name: format!("trait.{}", key),
            description: format!("trait.{}.description", key),
            weight,
            selected,
        }
    }
}

impl Entity for Trait {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringDna {
    pub traits: Vec<Trait>,
}

impl Default for HiringDna {
    fn default() -> Self {
        Self {
            traits: vec![
                Trait::sample(1, "growthMindset", 70, true),
                Trait::sample(2, "initiative", 80, true),
                Trait::sample(3, "ownership", 90, true),
                Trait::sample(4, "communication", 60, false),
                Trait::sample(5, "adaptability", 50, false),
                Trait::sample(6, "collaboration", 75, true),
                Trait::sample(7, "criticalThinking", 65, false),
                Trait::sample(8, "emotionalIntelligence", 55, true),
            ],
        }
    }
}

impl HiringDna {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_count(&self) -> usize {
        self.traits.iter().filter(|t| t.selected).count()
    }

    pub fn selected(&self) -> impl Iterator<Item = &Trait> {
        self.traits.iter().filter(|t| t.selected)
    }

    /// Flip selection of one trait, refusing any change that would move
    /// the count away from `REQUIRED_TRAITS`
    pub fn toggle(&self, id: u32) -> DomainResult<Self> {
        let index = self.index_of(id)?;
        let selected = self.selected_count();
        let is_selected = self.traits[index].selected;

        if is_selected && selected <= REQUIRED_TRAITS {
            return Err(DomainError::SelectionLimit {
                selected,
                required: REQUIRED_TRAITS,
            });
        }
        if !is_selected && selected >= REQUIRED_TRAITS {
            return Err(DomainError::SelectionLimit {
                selected,
                required: REQUIRED_TRAITS,
            });
        }

        let mut next = self.clone();
        next.traits[index].selected = !is_selected;
        Ok(next)
    }

    /// Set importance of a selected trait, clamped to the slider range
    pub fn set_weight(&self, id: u32, weight: u8) -> DomainResult<Self> {
        let index = self.index_of(id)?;
        if !self.traits[index].selected {
            return Err(DomainError::TraitNotSelected(id));
        }
        let mut next = self.clone();
        next.traits[index].weight = weight.clamp(TRAIT_WEIGHT_MIN, TRAIT_WEIGHT_MAX);
        Ok(next)
    }

    fn index_of(&self, id: u32) -> DomainResult<usize> {
        find_by_id(&self.traits, id).ok_or_else(|| DomainError::NotFound(format!("trait {}", id)))
    }
}

//! Stage Weight Rebalancing
//!
//! Three hiring stages share 100 weight points among the active ones.
//! Every transition keeps the active total unchanged:
//!
//! - deactivating a stage hands its weight evenly to the remaining active stages;
//! - activating a stage resets all active stages to an equal share of 100;
//! - editing one stage moves the opposite delta evenly across the other active stages.
//!
//! Only the edited value is bounded by the slider range. Redistributed
//! values may drift outside it.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Slider bounds for a manual weight edit
pub const STAGE_WEIGHT_MIN: f64 = 5.0;
pub const STAGE_WEIGHT_MAX: f64 = 90.0;
pub const STAGE_WEIGHT_STEP: f64 = 5.0;

/// Weight points shared by the active stages
pub const TOTAL_WEIGHT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Screening,
    Virtual,
    InPerson,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Screening, Stage::Virtual, Stage::InPerson];

    fn slot(self) -> usize {
        self as usize
    }

    /// Catalog key of the checkbox label
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            Stage::Screening => "onboarding.processStructure.automaticScreening",
            Stage::Virtual => "onboarding.processStructure.virtualAIChat",
            Stage::InPerson => "onboarding.processStructure.inPersonInterview",
        }
    }

    /// Catalog key of the slider label
    pub fn weight_label_key(self) -> &'static str {
        match self {
            Stage::Screening => "onboarding.processStructure.screening",
            Stage::Virtual => "onboarding.processStructure.virtual",
            Stage::InPerson => "onboarding.processStructure.inPerson",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct StageSlot {
    active: bool,
    weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageWeights {
    slots: [StageSlot; 3],
}

impl Default for StageWeights {
    fn default() -> Self {
        Self::from_parts([(true, 20.0), (true, 40.0), (true, 40.0)])
    }
}

impl StageWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(active, weight)` per stage in `Stage::ALL` order
    pub fn from_parts(parts: [(bool, f64); 3]) -> Self {
        Self {
            slots: parts.map(|(active, weight)| StageSlot { active, weight }),
        }
    }

    pub fn is_active(&self, stage: Stage) -> bool {
        self.slots[stage.slot()].active
    }

    pub fn weight(&self, stage: Stage) -> f64 {
        self.slots[stage.slot()].weight
    }

    /// Weight as shown next to the slider
    pub fn display_weight(&self, stage: Stage) -> i64 {
        self.weight(stage).round() as i64
    }

    pub fn active_stages(&self) -> Vec<Stage> {
        Stage::ALL.into_iter().filter(|s| self.is_active(*s)).collect()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Sum of active weights
    pub fn total(&self) -> f64 {
        self.slots.iter().filter(|s| s.active).map(|s| s.weight).sum()
    }

    /// Check or uncheck a stage, rebalancing weights
    pub fn set_active(&self, stage: Stage, active: bool) -> DomainResult<Self> {
        if self.is_active(stage) == active {
            return Ok(*self);
        }
        if active {
            Ok(self.activate(stage))
        } else {
            self.deactivate(stage)
        }
    }

    /// Manual slider edit on an active stage
    pub fn set_weight(&self, stage: Stage, value: f64) -> DomainResult<Self> {
        if !self.is_active(stage) {
            return Err(DomainError::InactiveStage(stage));
        }
        let value = value.clamp(STAGE_WEIGHT_MIN, STAGE_WEIGHT_MAX);
        let others: Vec<Stage> = self
            .active_stages()
            .into_iter()
            .filter(|s| *s != stage)
            .collect();
        if others.is_empty() {
            return Err(DomainError::NoCounterweight(stage));
        }

        let adjustment = (value - self.weight(stage)) / others.len() as f64;
        let mut next = *self;
        next.slots[stage.slot()].weight = value;
        for other in others {
            next.slots[other.slot()].weight -= adjustment;
        }
        Ok(next)
    }

    fn activate(&self, stage: Stage) -> Self {
        let mut next = *self;
        next.slots[stage.slot()].active = true;
        let share = TOTAL_WEIGHT / next.active_count() as f64;
        for slot in next.slots.iter_mut().filter(|s| s.active) {
            slot.weight = share;
        }
        log::debug!("Activated {:?}; active stages reset to {:.2}", stage, share);
        next
    }

    fn deactivate(&self, stage: Stage) -> DomainResult<Self> {
        let remaining = self.active_count() - 1;
        if remaining == 0 {
            return Err(DomainError::LastActiveStage);
        }
        let share = self.weight(stage) / remaining as f64;
        let mut next = *self;
        for other in Stage::ALL.into_iter().filter(|s| *s != stage && self.is_active(*s)) {
            next.slots[other.slot()].weight += share;
        }
        next.slots[stage.slot()] = StageSlot {
            active: false,
            weight: 0.0,
        };
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{} != {}", a, b);
    }

    #[test]
    fn test_defaults_sum_to_100() {
        let w = StageWeights::new();
        assert_eq!(w.active_count(), 3);
        assert_close(w.total(), 100.0);
    }

    #[test]
    fn test_deactivate_redistributes_evenly() {
        let w = StageWeights::new().set_active(Stage::Screening, false).unwrap();
        assert!(!w.is_active(Stage::Screening));
        assert_close(w.weight(Stage::Screening), 0.0);
        assert_close(w.weight(Stage::Virtual), 50.0);
        assert_close(w.weight(Stage::InPerson), 50.0);
        assert_close(w.total(), 100.0);
    }

    #[test]
    fn test_activate_resets_to_equal_shares() {
        let w = StageWeights::new()
            .set_active(Stage::InPerson, false)
            .unwrap()
            .set_active(Stage::InPerson, true)
            .unwrap();
        for stage in Stage::ALL {
            assert_close(w.weight(stage), 100.0 / 3.0);
        }
        assert_close(w.total(), 100.0);
    }

    #[test]
    fn test_edit_moves_delta_to_other_active_stages() {
        let w = StageWeights::new().set_weight(Stage::Screening, 40.0).unwrap();
        assert_close(w.weight(Stage::Screening), 40.0);
        assert_close(w.weight(Stage::Virtual), 30.0);
        assert_close(w.weight(Stage::InPerson), 30.0);
    }

    #[test]
    fn test_edit_with_two_active() {
        let w = StageWeights::from_parts([(true, 50.0), (true, 50.0), (false, 0.0)]);
        let w = w.set_weight(Stage::Virtual, 70.0).unwrap();
        assert_close(w.weight(Stage::Screening), 30.0);
        assert_close(w.weight(Stage::InPerson), 0.0);
        assert_close(w.total(), 100.0);
    }

    #[test]
    fn test_edit_is_clamped_to_slider_range() {
        let w = StageWeights::new().set_weight(Stage::Virtual, 120.0).unwrap();
        assert_close(w.weight(Stage::Virtual), STAGE_WEIGHT_MAX);
        assert_close(w.total(), 100.0);
    }

    #[test]
    fn test_redistribution_can_leave_slider_range() {
        let w = StageWeights::new()
            .set_weight(Stage::Virtual, 90.0)
            .unwrap()
            .set_weight(Stage::InPerson, 90.0)
            .unwrap();
        assert!(w.weight(Stage::Screening) < STAGE_WEIGHT_MIN);
        assert_close(w.total(), 100.0);
    }

    #[test]
    fn test_last_active_stage_cannot_be_deactivated() {
        let w = StageWeights::from_parts([(true, 100.0), (false, 0.0), (false, 0.0)]);
        assert_eq!(
            w.set_active(Stage::Screening, false),
            Err(DomainError::LastActiveStage)
        );
    }

    #[test]
    fn test_sole_active_stage_edit_rejected() {
        let w = StageWeights::from_parts([(false, 0.0), (false, 0.0), (true, 100.0)]);
        assert_eq!(
            w.set_weight(Stage::InPerson, 50.0),
            Err(DomainError::NoCounterweight(Stage::InPerson))
        );
        assert_close(w.total(), 100.0);
    }

    #[test]
    fn test_inactive_stage_edit_rejected() {
        let w = StageWeights::from_parts([(true, 50.0), (true, 50.0), (false, 0.0)]);
        assert_eq!(
            w.set_weight(Stage::InPerson, 30.0),
            Err(DomainError::InactiveStage(Stage::InPerson))
        );
    }

    #[test]
    fn test_setting_same_state_is_noop() {
        let w = StageWeights::new();
        assert_eq!(w.set_active(Stage::Virtual, true).unwrap(), w);
    }

    #[test]
    fn test_display_weight_rounds() {
        let w = StageWeights::from_parts([(true, 100.0 / 3.0), (true, 100.0 / 3.0), (true, 100.0 / 3.0)]);
        assert_eq!(w.display_weight(Stage::Screening), 33);
    }
}

//! Wizard Step Controller
//!
//! A bounded step index. `next` and `back` move it by one and clamp to
//! `[0, TOTAL_STEPS]`; index `TOTAL_STEPS` is the success screen.

use serde::{Deserialize, Serialize};

/// Number of numbered steps; the success screen sits at this index
pub const TOTAL_STEPS: usize = 8;

/// Onboarding screens in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Welcome,
    CompanyValues,
    TeamData,
    RolesMapping,
    HiringDna,
    Calibration,
    ProcessStructure,
    Finalize,
    Success,
}

impl Step {
    pub const ALL: [Step; TOTAL_STEPS + 1] = [
        Step::Welcome,
        Step::CompanyValues,
        Step::TeamData,
        Step::RolesMapping,
        Step::HiringDna,
        Step::Calibration,
        Step::ProcessStructure,
        Step::Finalize,
        Step::Success,
    ];

    pub fn from_index(index: usize) -> Step {
        Step::ALL[index.min(TOTAL_STEPS)]
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Progress-bar state of one numbered step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

/// Current position in the onboarding sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Wizard {
    step: usize,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> Step {
        Step::from_index(self.step)
    }

    pub fn next(&self) -> Wizard {
        Wizard {
            step: (self.step + 1).min(TOTAL_STEPS),
        }
    }

    pub fn back(&self) -> Wizard {
        Wizard {
            step: self.step.saturating_sub(1),
        }
    }

    /// True on the success screen
    pub fn is_finished(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    /// Back is offered on every numbered step except the first
    pub fn has_back(&self) -> bool {
        self.step > 0 && self.step < TOTAL_STEPS
    }

    /// Status of each numbered step, for the progress bar
    pub fn progress(&self) -> Vec<StepStatus> {
        (0..TOTAL_STEPS)
            .map(|i| {
                if self.step > i {
                    StepStatus::Completed
                } else if self.step == i {
                    StepStatus::Active
                } else {
                    StepStatus::Upcoming
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_welcome() {
        let wizard = Wizard::new();
        assert_eq!(wizard.index(), 0);
        assert_eq!(wizard.current(), Step::Welcome);
        assert!(!wizard.has_back());
    }

    #[test]
    fn test_back_clamps_at_zero() {
        assert_eq!(Wizard::new().back().index(), 0);
    }

    #[test]
    fn test_next_clamps_at_success() {
        let mut wizard = Wizard::new();
        for _ in 0..20 {
            wizard = wizard.next();
        }
        assert_eq!(wizard.index(), TOTAL_STEPS);
        assert_eq!(wizard.current(), Step::Success);
        assert!(wizard.is_finished());
        assert!(!wizard.has_back());
    }

    #[test]
    fn test_step_order() {
        let mut wizard = Wizard::new();
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(wizard.current(), *step);
            assert_eq!(step.index(), i);
            wizard = wizard.next();
        }
    }

    #[test]
    fn test_progress_statuses() {
        let wizard = Wizard::new().next().next();
        let progress = wizard.progress();
        assert_eq!(progress.len(), TOTAL_STEPS);
        assert_eq!(progress[0], StepStatus::Completed);
        assert_eq!(progress[1], StepStatus::Completed);
        assert_eq!(progress[2], StepStatus::Active);
        assert!(progress[3..].iter().all(|s| *s == StepStatus::Upcoming));
    }
}

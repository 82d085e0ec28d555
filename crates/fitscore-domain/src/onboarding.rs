//! Onboarding Aggregate
//!
//! The wizard position plus the record of every step. Steps own their
//! gates; `next` refuses to leave a step whose gate is closed.

use serde::{Deserialize, Serialize};

use crate::calibration::Calibration;
use crate::company_values::CompanyValues;
use crate::error::{DomainError, DomainResult};
use crate::hiring_dna::HiringDna;
use crate::process::ProcessStructure;
use crate::roles::RolesMapping;
use crate::team_data::TeamData;
use crate::wizard::{Step, Wizard};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Onboarding {
    pub wizard: Wizard,
    pub company_values: CompanyValues,
    pub team_data: TeamData,
    pub roles: RolesMapping,
    pub hiring_dna: HiringDna,
    pub calibration: Calibration,
    pub process: ProcessStructure,
}

/// Counts shown on the finalize step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingSummary {
    pub values: usize,
    pub employees: usize,
    pub roles: usize,
    pub traits: usize,
    pub profiles_evaluated: usize,
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.wizard.current()
    }

    /// Whether the current step's Next control is enabled
    pub fn can_advance(&self) -> bool {
        match self.step() {
            Step::CompanyValues => self.company_values.can_advance(),
            Step::Calibration => self.calibration.all_rated(),
            Step::ProcessStructure => self.process.can_advance(),
            Step::Success => false,
            _ => true,
        }
    }

    pub fn next(&self) -> DomainResult<Self> {
        let step = self.step();
        if !self.can_advance() {
            return Err(DomainError::StepIncomplete(step));
        }
        let wizard = self.wizard.next();
        log::info!("Onboarding: {:?} -> {:?}", step, wizard.current());
        Ok(Self {
            wizard,
            ..self.clone()
        })
    }

    pub fn back(&self) -> Self {
        let wizard = self.wizard.back();
        log::info!("Onboarding: back to {:?}", wizard.current());
        Self {
            wizard,
            ..self.clone()
        }
    }

    pub fn summary(&self) -> OnboardingSummary {
        OnboardingSummary {
            values: self.company_values.selected.len(),
            employees: self.team_data.record_count(),
            roles: self.roles.roles.len(),
            traits: self.hiring_dna.selected_count(),
            profiles_evaluated: self.calibration.rated_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::Feedback;
    use crate::process::VacancyType;
    use crate::team_data::{MockTeamDataSource, UploadedFile};

    fn at(step: Step) -> Onboarding {
        let mut onboarding = Onboarding::new();
        for _ in 0..step.index() {
            onboarding = Onboarding {
                wizard: onboarding.wizard.next(),
                ..onboarding
            };
        }
        onboarding
    }

    #[test]
    fn test_welcome_advances_freely() {
        let next = Onboarding::new().next().unwrap();
        assert_eq!(next.step(), Step::CompanyValues);
    }

    #[test]
    fn test_company_values_gate() {
        let onboarding = at(Step::CompanyValues);
        assert_eq!(
            onboarding.next(),
            Err(DomainError::StepIncomplete(Step::CompanyValues))
        );

        let onboarding = Onboarding {
            company_values: onboarding.company_values.add_value("Candor").unwrap(),
            ..onboarding
        };
        assert_eq!(onboarding.next().unwrap().step(), Step::TeamData);
    }

    #[test]
    fn test_calibration_gate() {
        let mut onboarding = at(Step::Calibration);
        for (i, verdict) in [Feedback::Agree, Feedback::Disagree].into_iter().enumerate() {
            onboarding.calibration = onboarding.calibration.give_feedback(verdict).unwrap();
            assert!(!onboarding.can_advance(), "gate open after {} verdicts", i + 1);
        }
        onboarding.calibration = onboarding.calibration.give_feedback(Feedback::Agree).unwrap();
        assert!(onboarding.can_advance());
        assert_eq!(onboarding.next().unwrap().step(), Step::ProcessStructure);
    }

    #[test]
    fn test_process_structure_gate() {
        let mut onboarding = at(Step::ProcessStructure);
        assert!(!onboarding.can_advance());
        onboarding.process = onboarding
            .process
            .set_process_name("Sales 2025")
            .set_vacancy_type(VacancyType::FullTime);
        assert!(onboarding.can_advance());
    }

    #[test]
    fn test_success_has_no_next() {
        let onboarding = at(Step::Success);
        assert!(onboarding.next().is_err());
        assert_eq!(onboarding.back().step(), Step::Finalize);
    }

    #[test]
    fn test_back_keeps_step_state() {
        let onboarding = at(Step::CompanyValues);
        let onboarding = Onboarding {
            company_values: onboarding.company_values.add_value("Trust").unwrap(),
            ..onboarding
        };
        let onboarding = onboarding.next().unwrap().back();
        assert_eq!(onboarding.step(), Step::CompanyValues);
        assert_eq!(onboarding.company_values.selected.len(), 1);
    }

    #[test]
    fn test_summary_reflects_state() {
        let mut onboarding = Onboarding::new();
        onboarding.company_values = onboarding.company_values.add_value("A").unwrap().add_value("B").unwrap();
        onboarding.team_data = onboarding
            .team_data
            .load(
                &MockTeamDataSource,
                UploadedFile {
                    name: "team.csv".to_string(),
                    size: 64,
                },
            )
            .unwrap();
        onboarding.calibration = onboarding.calibration.give_feedback(Feedback::Agree).unwrap();

        assert_eq!(
            onboarding.summary(),
            OnboardingSummary {
                values: 2,
                employees: 3,
                roles: 1,
                traits: 5,
                profiles_evaluated: 1,
            }
        );
    }
}

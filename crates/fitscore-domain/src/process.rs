//! Process Structure Step

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::stages::{Stage, StageWeights};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VacancyType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

impl VacancyType {
    pub const ALL: [VacancyType; 5] = [
        VacancyType::FullTime,
        VacancyType::PartTime,
        VacancyType::Contract,
        VacancyType::Internship,
        VacancyType::Temporary,
    ];

    /// Option value used by the select element
    pub fn value(self) -> &'static str {
        match self {
            VacancyType::FullTime => "full-time",
            VacancyType::PartTime => "part-time",
            VacancyType::Contract => "contract",
            VacancyType::Internship => "internship",
            VacancyType::Temporary => "temporary",
        }
    }

    pub fn parse(value: &str) -> DomainResult<VacancyType> {
        VacancyType::ALL
            .into_iter()
            .find(|v| v.value() == value)
            .ok_or_else(|| DomainError::InvalidInput(format!("vacancy type {:?}", value)))
    }

    pub fn label_key(self) -> &'static str {
        match self {
            VacancyType::FullTime => "onboarding.processStructure.fullTime",
            VacancyType::PartTime => "onboarding.processStructure.partTime",
            VacancyType::Contract => "onboarding.processStructure.contract",
            VacancyType::Internship => "onboarding.processStructure.internship",
            VacancyType::Temporary => "onboarding.processStructure.temporary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStructure {
    pub process_name: String,
    pub vacancy_type: Option<VacancyType>,
    pub stages: StageWeights,
    pub recording_link: String,
    pub generate_questions: bool,
}

impl Default for ProcessStructure {
    fn default() -> Self {
        Self {
            process_name: String::new(),
            vacancy_type: None,
            stages: StageWeights::new(),
            recording_link: String::new(),
            generate_questions: true,
        }
    }
}

impl ProcessStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_process_name(&self, name: &str) -> Self {
        Self {
            process_name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn set_vacancy_type(&self, vacancy_type: VacancyType) -> Self {
        Self {
            vacancy_type: Some(vacancy_type),
            ..self.clone()
        }
    }

    pub fn set_recording_link(&self, link: &str) -> Self {
        Self {
            recording_link: link.to_string(),
            ..self.clone()
        }
    }

    pub fn set_generate_questions(&self, on: bool) -> Self {
        Self {
            generate_questions: on,
            ..self.clone()
        }
    }

    pub fn set_stage_active(&self, stage: Stage, active: bool) -> DomainResult<Self> {
        Ok(Self {
            stages: self.stages.set_active(stage, active)?,
            ..self.clone()
        })
    }

    pub fn set_stage_weight(&self, stage: Stage, weight: f64) -> DomainResult<Self> {
        Ok(Self {
            stages: self.stages.set_weight(stage, weight)?,
            ..self.clone()
        })
    }

    /// Name, vacancy type and at least one active stage are required
    pub fn can_advance(&self) -> bool {
        !self.process_name.trim().is_empty()
            && self.vacancy_type.is_some()
            && self.stages.active_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_requires_name_and_vacancy() {
        let process = ProcessStructure::new();
        assert!(!process.can_advance());

        let process = process.set_process_name("Backend hiring");
        assert!(!process.can_advance());

        let process = process.set_vacancy_type(VacancyType::Contract);
        assert!(process.can_advance());
    }

    #[test]
    fn test_blank_name_does_not_pass() {
        let process = ProcessStructure::new()
            .set_process_name("   ")
            .set_vacancy_type(VacancyType::FullTime);
        assert!(!process.can_advance());
    }

    #[test]
    fn test_vacancy_parse() {
        for v in VacancyType::ALL {
            assert_eq!(VacancyType::parse(v.value()), Ok(v));
        }
        assert!(VacancyType::parse("freelance").is_err());
    }

    #[test]
    fn test_stage_edits_pass_through() {
        let process = ProcessStructure::new()
            .set_stage_active(Stage::Screening, false)
            .unwrap();
        assert!(!process.stages.is_active(Stage::Screening));
        assert!(process.set_stage_weight(Stage::Screening, 30.0).is_err());
    }

    #[test]
    fn test_generate_questions_default_on() {
        let process = ProcessStructure::new();
        assert!(process.generate_questions);
        assert!(!process.set_generate_questions(false).generate_questions);
    }
}

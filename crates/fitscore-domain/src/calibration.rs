//! Calibration Step
//!
//! A walk over sample candidates, each taking one write-once verdict.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Agree,
    Disagree,
}

/// Sample candidate with a hard-coded score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub education: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub fit_score: u8,
    pub feedback: Option<Feedback>,
}

impl CandidateProfile {
    fn sample(
        id: u32,
        name: &str,
        education: &str,
        experience: &str,
        skills: &[&str],
        fit_score: u8,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            position: "Software Engineer".to_string(),
            education: education.to_string(),
            experience: experience.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            fit_score,
            feedback: None,
        }
    }
}

impl Entity for CandidateProfile {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// State of one progress dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    Current,
    Rated,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub candidates: Vec<CandidateProfile>,
    pub current: usize,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            candidates: vec![
                CandidateProfile::sample(
                    1,
                    "Candidate A",
                    "BS Computer Science",
                    "5 years in SaaS companies",
                    &["JavaScript", "React", "Node.js", "Testing", "Agile"],
                    87,
                ),
                CandidateProfile::sample(
                    2,
                    "Candidate B",
                    "MS Information Technology",
                    "3 years in E-commerce",
                    &["Python", "Django", "SQL", "API Design"],
                    73,
                ),
                CandidateProfile::sample(
                    3,
                    "Candidate C",
                    "Self-taught",
                    "8 years in startups",
                    &["JavaScript", "Vue.js", "Express", "MongoDB"],
                    65,
                ),
            ],
            current: 0,
        }
    }
}

impl Calibration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_candidate(&self) -> Option<&CandidateProfile> {
        self.candidates.get(self.current)
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.candidates.len()
    }

    /// Record a verdict on the current candidate and move on unless it is the last
    pub fn give_feedback(&self, feedback: Feedback) -> DomainResult<Self> {
        let candidate = self
            .current_candidate()
            .ok_or_else(|| DomainError::NotFound(format!("candidate #{}", self.current)))?;
        if candidate.feedback.is_some() {
            return Err(DomainError::FeedbackAlreadySet(candidate.id));
        }
        let mut next = self.clone();
        next.candidates[self.current].feedback = Some(feedback);
        if !self.is_last() {
            next.current += 1;
        }
        Ok(next)
    }

    /// Manual "Next Candidate"; a no-op on the last one
    pub fn next_candidate(&self) -> Self {
        let mut next = self.clone();
        if !self.is_last() {
            next.current += 1;
        }
        next
    }

    pub fn rated_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.feedback.is_some()).count()
    }

    pub fn all_rated(&self) -> bool {
        self.candidates.iter().all(|c| c.feedback.is_some())
    }

    pub fn dots(&self) -> Vec<DotState> {
        self.candidates
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == self.current {
                    DotState::Current
                } else if c.feedback.is_some() {
                    DotState::Rated
                } else {
                    DotState::Pending
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_candidates() {
        let cal = Calibration::new();
        let scores: Vec<u8> = cal.candidates.iter().map(|c| c.fit_score).collect();
        assert_eq!(scores, vec![87, 73, 65]);
        assert!(!cal.all_rated());
    }

    #[test]
    fn test_feedback_advances_automatically() {
        let cal = Calibration::new().give_feedback(Feedback::Agree).unwrap();
        assert_eq!(cal.current, 1);
        assert_eq!(cal.candidates[0].feedback, Some(Feedback::Agree));
    }

    #[test]
    fn test_gate_releases_after_all_three() {
        let cal = Calibration::new()
            .give_feedback(Feedback::Agree)
            .unwrap()
            .give_feedback(Feedback::Disagree)
            .unwrap();
        assert!(!cal.all_rated());
        assert_eq!(cal.rated_count(), 2);

        let cal = cal.give_feedback(Feedback::Agree).unwrap();
        assert!(cal.all_rated());
        assert_eq!(cal.current, 2);
    }

    #[test]
    fn test_feedback_is_write_once() {
        let cal = Calibration::new()
            .give_feedback(Feedback::Agree)
            .unwrap()
            .give_feedback(Feedback::Agree)
            .unwrap()
            .give_feedback(Feedback::Disagree)
            .unwrap();
        assert_eq!(
            cal.give_feedback(Feedback::Agree),
            Err(DomainError::FeedbackAlreadySet(3))
        );
        assert_eq!(cal.candidates[2].feedback, Some(Feedback::Disagree));
    }

    #[test]
    fn test_manual_next_stops_at_last() {
        let cal = Calibration::new().next_candidate().next_candidate().next_candidate();
        assert_eq!(cal.current, 2);
        assert!(cal.is_last());
    }

    #[test]
    fn test_dots() {
        let cal = Calibration::new().give_feedback(Feedback::Disagree).unwrap();
        assert_eq!(
            cal.dots(),
            vec![DotState::Rated, DotState::Current, DotState::Pending]
        );
    }
}

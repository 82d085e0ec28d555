//! Team Data Step
//!
//! A selected employee file is turned into preview rows by a
//! `TeamDataSource`. The shipped source does not read the file: it returns
//! the same three sample rows for any selection.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performance {
    High,
    Medium,
    Low,
}

impl Performance {
    /// Catalog key of the display label
    pub fn label_key(self) -> &'static str {
        match self {
            Performance::High => "onboarding.teamData.performance.high",
            Performance::Medium => "onboarding.teamData.performance.medium",
            Performance::Low => "onboarding.teamData.performance.low",
        }
    }
}

/// One preview row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: String,
    pub position: String,
    pub performance: Performance,
    pub tenure: String,
    pub high_performer: bool,
}

impl EmployeeRecord {
    /// Row with the high-performer flag defaulted from the rating
    pub fn new(name: &str, position: &str, performance: Performance, tenure: &str) -> Self {
        Self {
            name: name.to_string(),
            position: position.to_string(),
            performance,
            tenure: tenure.to_string(),
            high_performer: performance == Performance::High,
        }
    }
}

/// Metadata of the file picked by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
}

/// Produces preview rows for an uploaded employee file
pub trait TeamDataSource {
    fn preview(&self, file: &UploadedFile) -> DomainResult<Vec<EmployeeRecord>>;
}

/// Fixed sample rows, regardless of file content
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTeamDataSource;

impl TeamDataSource for MockTeamDataSource {
    fn preview(&self, file: &UploadedFile) -> DomainResult<Vec<EmployeeRecord>> {
        log::debug!("Using sample preview for {} ({} bytes)", file.name, file.size);
        Ok(vec![
            EmployeeRecord::new("John Smith", "Sr. Developer", Performance::High, "3.5 years"),
            EmployeeRecord::new("Maria Garcia", "Product Manager", Performance::Medium, "2.1 years"),
            EmployeeRecord::new("Alex Chen", "UX Designer", Performance::High, "1.8 years"),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamData {
    pub file: Option<UploadedFile>,
    pub preview: Vec<EmployeeRecord>,
}

impl TeamData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, source: &dyn TeamDataSource, file: UploadedFile) -> DomainResult<Self> {
        let preview = source.preview(&file)?;
        Ok(Self {
            file: Some(file),
            preview,
        })
    }

    /// "Change file": forget the selection and its preview
    pub fn reset(&self) -> Self {
        Self::new()
    }

    pub fn toggle_high_performer(&self, row: usize) -> DomainResult<Self> {
        if row >= self.preview.len() {
            return Err(DomainError::NotFound(format!("preview row {}", row)));
        }
        let mut next = self.clone();
        next.preview[row].high_performer = !next.preview[row].high_performer;
        Ok(next)
    }

    pub fn record_count(&self) -> usize {
        self.preview.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(name: &str, size: u64) -> UploadedFile {
        UploadedFile {
            name: name.to_string(),
            size,
        }
    }

    #[test]
    fn test_mock_ignores_file_content() {
        let a = MockTeamDataSource.preview(&csv("a.csv", 10)).unwrap();
        let b = MockTeamDataSource.preview(&csv("b.xlsx", 99_999)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_load_and_reset() {
        let data = TeamData::new().load(&MockTeamDataSource, csv("team.csv", 512)).unwrap();
        assert_eq!(data.file.as_ref().map(|f| f.name.as_str()), Some("team.csv"));
        assert_eq!(data.record_count(), 3);

        let data = data.reset();
        assert!(data.file.is_none());
        assert_eq!(data.record_count(), 0);
    }

    #[test]
    fn test_high_performer_defaults_from_rating() {
        let data = TeamData::new().load(&MockTeamDataSource, csv("team.csv", 1)).unwrap();
        let flags: Vec<bool> = data.preview.iter().map(|r| r.high_performer).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_toggle_high_performer() {
        let data = TeamData::new().load(&MockTeamDataSource, csv("team.csv", 1)).unwrap();
        let data = data.toggle_high_performer(1).unwrap();
        assert!(data.preview[1].high_performer);
        assert!(matches!(data.toggle_high_performer(3), Err(DomainError::NotFound(_))));
    }

    struct FailingSource;

    impl TeamDataSource for FailingSource {
        fn preview(&self, _file: &UploadedFile) -> DomainResult<Vec<EmployeeRecord>> {
            Err(DomainError::InvalidInput("unreadable".to_string()))
        }
    }

    #[test]
    fn test_source_error_propagates() {
        assert!(TeamData::new().load(&FailingSource, csv("x.csv", 1)).is_err());
    }
}

//! FitScore Domain Layer
//!
//! Onboarding state and pure transitions for the FitScore customization wizard.
//! Every user action is a function from one immutable record to the next;
//! a rejected action returns `Err` and the caller keeps its old record.
//!
//! This crate has no UI or browser dependencies.

mod entity;
mod error;

pub mod calibration;
pub mod company_values;
pub mod dashboard;
pub mod hiring_dna;
pub mod i18n;
pub mod locale;
pub mod onboarding;
pub mod process;
pub mod roles;
pub mod stages;
pub mod team_data;
pub mod wizard;

pub use entity::{find_by_id, Entity};
pub use error::{DomainError, DomainResult};

pub use calibration::{Calibration, CandidateProfile, DotState, Feedback};
pub use company_values::CompanyValues;
pub use hiring_dna::{HiringDna, Trait, REQUIRED_TRAITS};
pub use i18n::{Catalog, Translator};
pub use locale::{Locale, MemoryStore, PreferenceStore};
pub use onboarding::{Onboarding, OnboardingSummary};
pub use process::{ProcessStructure, VacancyType};
pub use roles::{Role, RolesMapping};
pub use stages::{Stage, StageWeights};
pub use team_data::{EmployeeRecord, MockTeamDataSource, Performance, TeamData, TeamDataSource, UploadedFile};
pub use wizard::{Step, StepStatus, Wizard, TOTAL_STEPS};

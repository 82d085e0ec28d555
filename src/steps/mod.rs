//! Onboarding Wizard Steps
//!
//! One component per wizard step.

mod calibration;
mod company_values;
mod finalize;
mod hiring_dna;
mod process_structure;
mod roles_mapping;
mod success;
mod team_data;
mod welcome;

pub use calibration::CalibrationStep;
pub use company_values::CompanyValuesStep;
pub use finalize::FinalizeStep;
pub use hiring_dna::HiringDnaStep;
pub use process_structure::ProcessStructureStep;
pub use roles_mapping::RolesMappingStep;
pub use success::SuccessStep;
pub use team_data::TeamDataStep;
pub use welcome::WelcomeStep;

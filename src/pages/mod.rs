//! Top-level screens

mod dashboard;
mod landing;
mod onboarding;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use onboarding::OnboardingPage;

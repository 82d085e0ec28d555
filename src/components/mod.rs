//! UI Components
//!
//! Reusable Leptos components.

mod language_switcher;
mod logo;
mod progress_bar;
mod step_layout;
mod summary_card;
mod tag_chips;

pub use language_switcher::LanguageSwitcher;
pub use logo::Logo;
pub use progress_bar::ProgressBar;
pub use step_layout::StepLayout;
pub use summary_card::SummaryCard;
pub use tag_chips::{TagChips, TagInput};

//! Profile scoring and advisory validation used by the profile editor.

pub mod completeness;
pub mod validation;

pub use completeness::{completeness_report, CompletenessReport, SectionScores};
pub use validation::validate_profile;

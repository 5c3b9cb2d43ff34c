//! Stateless service wrappers, one per backend resource family.
//!
//! Each service is a façade over [`crate::ApiClient`]: one async method per
//! REST operation, a fixed path template, and nothing else. No validation,
//! no retries, no response massaging beyond the typed JSON decode. Errors
//! propagate to the caller untouched.
//!
//! Services are constructed with the client they should share. Constructing
//! several services from clones of one `ApiClient` gives them a common
//! session (the auth token set by [`AuthService::login`] applies to all).

mod analytics;
mod applications;
mod auth;
mod companies;
mod dedup;
mod job_sources;
mod jobs;
mod resumes;
mod search;
mod skill_banks;
mod timeline;
mod users;

pub use analytics::AnalyticsService;
pub use applications::JobApplicationService;
pub use auth::AuthService;
pub use companies::CompanyService;
pub use dedup::JobDeduplicationService;
pub use job_sources::JobSourceService;
pub use jobs::JobService;
pub use resumes::ResumeService;
pub use search::SearchService;
pub use skill_banks::SkillBankService;
pub use timeline::TimelineService;
pub use users::UserProfileService;

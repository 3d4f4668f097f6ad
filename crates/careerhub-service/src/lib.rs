//! # careerhub-service
//!
//! Business logic for CareerHub. Each service orchestrates one or more of
//! the `careerhub-client` API traits to implement an application use case.
//!
//! Services follow constructor injection; the API implementation is
//! provided at construction time via an `Arc`.

pub mod company;
pub mod display;
pub mod jobs;

pub use company::{
    CompanyBuilder, CompanyService, PublicPage, PublishToggle, SectionList, ToggleOutcome, slugify,
};
pub use display::{format_salary, job_postings_ld, robots, sitemap};
pub use jobs::{
    Debouncer, JobFilters, JobListing, JobManager, JobQueryService, JobSearch, ListingView,
    Refetch, ResultSequencer, SearchEvent,
};

//! Job listing query contract and recruiter job management.

pub mod debounce;
pub mod filters;
pub mod listing;
pub mod manage;
pub mod query;
pub mod search;
pub mod sequence;

pub use debounce::Debouncer;
pub use filters::JobFilters;
pub use listing::{JobListing, ListingMode, ListingView, Refetch};
pub use manage::{DashboardSummary, JobManager};
pub use query::{FetchOutcome, JobQueryService, PendingFetch};
pub use search::{JobSearch, SearchEvent};
pub use sequence::{ResultSequencer, Ticket};

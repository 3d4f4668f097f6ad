//! Job listing domain entities.

pub mod model;
pub mod salary;
pub mod status;

pub use model::{
    CreateJob, EMPLOYMENT_TYPES, EXPERIENCE_LEVELS, JOB_TYPES, Job, JobListMetadata, JobListResponse, UpdateJob,
};
pub use salary::{SalaryDisclosure, SalaryFrequency, SalaryType};
pub use status::{JobStatus, WorkPolicy};

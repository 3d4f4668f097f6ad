//! Encoded request for `GET /jobs/list`.

use careerhub_core::types::id::CompanyId;
use careerhub_core::types::{JobSort, PageRequest};
use careerhub_entity::job::{JobStatus, SalaryType, WorkPolicy};

/// A fully resolved job search request.
///
/// Optional constraints are `None` when unset and are left out of the query
/// string entirely. `sort_by`, `skip` and `limit` are always sent.
#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    /// Company whose jobs are listed.
    pub company_id: CompanyId,
    /// Case-insensitive substring search.
    pub search: Option<String>,
    /// Work policy constraint.
    pub work_policy: Option<WorkPolicy>,
    /// Location constraint.
    pub location: Option<String>,
    /// Salary disclosure constraint.
    pub salary_type: Option<SalaryType>,
    /// Status constraint.
    pub status: Option<JobStatus>,
    /// Sort mode.
    pub sort_by: JobSort,
    /// Number of results to skip.
    pub skip: u64,
    /// Maximum results to return.
    pub limit: u64,
}

impl JobQuery {
    /// An unconstrained query for one page of a company's jobs.
    pub fn for_company(company_id: CompanyId, page: PageRequest) -> Self {
        Self {
            company_id,
            search: None,
            work_policy: None,
            location: None,
            salary_type: None,
            status: None,
            sort_by: JobSort::default(),
            skip: page.skip(),
            limit: page.limit(),
        }
    }

    /// The ordered query pairs sent on the wire.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("company_id", self.company_id.to_string())];

        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(policy) = self.work_policy {
            pairs.push(("work_policy", policy.to_string()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(salary_type) = self.salary_type {
            pairs.push(("salary_type", salary_type.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }

        pairs.push(("sort_by", self.sort_by.to_string()));
        pairs.push(("skip", self.skip.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

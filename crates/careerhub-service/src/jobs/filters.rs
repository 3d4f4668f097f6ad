//! Typed filter set for job listings.

use serde::{Deserialize, Serialize};

use careerhub_client::JobQuery;
use careerhub_core::types::id::CompanyId;
use careerhub_core::types::{Choice, JobSort, PageRequest};
use careerhub_entity::job::{JobStatus, SalaryType, WorkPolicy};

/// Every filter a job listing page can set.
///
/// `Choice::All` and an empty search mean "no constraint" and are never
/// transmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilters {
    /// Company whose jobs are listed. Nothing is requested without it.
    pub company_id: Option<CompanyId>,
    /// Free-text search term.
    pub search: String,
    /// Work policy filter.
    pub work_policy: Choice<WorkPolicy>,
    /// Location filter.
    pub location: Choice<String>,
    /// Salary disclosure filter.
    pub salary_type: Choice<SalaryType>,
    /// Status filter.
    pub status: Choice<JobStatus>,
    /// Sort mode.
    pub sort_by: JobSort,
    /// 1-based page number.
    pub page: u64,
}

impl Default for JobFilters {
    fn default() -> Self {
        Self {
            company_id: None,
            search: String::new(),
            work_policy: Choice::All,
            location: Choice::All,
            salary_type: Choice::All,
            status: Choice::All,
            sort_by: JobSort::Newest,
            page: 1,
        }
    }
}

impl JobFilters {
    /// Unconstrained filters for one company.
    pub fn for_company(company_id: CompanyId) -> Self {
        Self {
            company_id: Some(company_id),
            ..Self::default()
        }
    }

    /// Resolve the filters into a request, or `None` when no company is set.
    pub fn to_query(&self, page_size: u64) -> Option<JobQuery> {
        let company_id = self.company_id.clone().filter(|id| !id.is_empty())?;
        let search = self.search.trim();

        let mut query = JobQuery::for_company(company_id, PageRequest::new(self.page, page_size));
        query.search = (!search.is_empty()).then(|| search.to_string());
        query.work_policy = self.work_policy.value().copied();
        query.location = self.location.value().cloned();
        query.salary_type = self.salary_type.value().copied();
        query.status = self.status.value().copied();
        query.sort_by = self.sort_by;
        Some(query)
    }

    /// Reset every filter except the company.
    pub fn clear(&mut self) {
        *self = Self {
            company_id: self.company_id.take(),
            ..Self::default()
        };
    }

    /// Whether any constraint beyond the company is active.
    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty()
            || !self.work_policy.is_all()
            || !self.location.is_all()
            || !self.salary_type.is_all()
            || !self.status.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(query: &JobQuery) -> Vec<&'static str> {
        query.to_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_missing_company_short_circuits() {
        let filters = JobFilters::default();
        assert!(filters.to_query(15).is_none());

        let blank = JobFilters::for_company(CompanyId::new("  "));
        assert!(blank.to_query(15).is_none());
    }

    #[test]
    fn test_all_choices_and_blank_search_are_omitted() {
        let mut filters = JobFilters::for_company(CompanyId::new("c1"));
        filters.search = "   ".into();
        filters.work_policy = Choice::parse("all").unwrap();

        let query = filters.to_query(15).unwrap();
        assert_eq!(keys(&query), ["company_id", "sort_by", "skip", "limit"]);
    }

    #[test]
    fn test_every_work_policy_all_omits_param() {
        for sort in JobSort::ALL {
            for location in [Choice::All, Choice::Only("Pune".to_string())] {
                let mut filters = JobFilters::for_company(CompanyId::new("c1"));
                filters.sort_by = sort;
                filters.location = location;
                filters.work_policy = Choice::All;
                let query = filters.to_query(10).unwrap();
                assert!(!keys(&query).contains(&"work_policy"));
                assert!(keys(&query).contains(&"sort_by"));
            }
        }
    }

    #[test]
    fn test_pagination_offsets() {
        let mut filters = JobFilters::for_company(CompanyId::new("c1"));
        filters.page = 4;
        let query = filters.to_query(15).unwrap();
        assert_eq!((query.skip, query.limit), (45, 15));

        let query = filters.to_query(10).unwrap();
        assert_eq!((query.skip, query.limit), (30, 10));
    }

    #[test]
    fn test_search_is_trimmed() {
        let mut filters = JobFilters::for_company(CompanyId::new("c1"));
        filters.search = "  Rust ".into();
        let query = filters.to_query(15).unwrap();
        assert_eq!(query.search.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_clear_keeps_company() {
        let mut filters = JobFilters::for_company(CompanyId::new("c1"));
        filters.search = "rust".into();
        filters.page = 3;
        filters.sort_by = JobSort::Oldest;
        filters.status = Choice::Only(JobStatus::Closed);
        assert!(filters.is_filtered());

        filters.clear();
        assert_eq!(filters, JobFilters::for_company(CompanyId::new("c1")));
        assert!(!filters.is_filtered());
    }
}

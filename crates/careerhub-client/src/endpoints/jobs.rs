use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

use careerhub_core::AppResult;
use careerhub_core::types::id::JobId;
use careerhub_entity::job::{CreateJob, Job, JobListResponse, UpdateJob};

use crate::api::JobsApi;
use crate::client::ApiClient;
use crate::query::JobQuery;

#[async_trait]
impl JobsApi for ApiClient {
    async fn list(&self, query: &JobQuery) -> AppResult<JobListResponse> {
        self.send_json(self.request(Method::GET, "/jobs/list").query(&query.to_pairs()))
            .await
    }

    async fn create(&self, job: &CreateJob) -> AppResult<Job> {
        let created: Job = self
            .send_json(self.request(Method::POST, "/jobs/create").json(job))
            .await?;
        info!(job_id = %created.id, company_id = %created.company_id, "Created job");
        Ok(created)
    }

    async fn update(&self, job_id: &JobId, mut update: UpdateJob) -> AppResult<Job> {
        update.job_id = Some(job_id.clone());
        let updated: Job = self
            .send_json(self.request(Method::PATCH, "/jobs/update").json(&update))
            .await?;
        info!(job_id = %updated.id, status = %updated.status, "Updated job");
        Ok(updated)
    }

    async fn delete(&self, job_id: &JobId) -> AppResult<()> {
        self.send_empty(
            self.request(Method::DELETE, "/jobs/delete")
                .query(&[("job_id", job_id.as_str())]),
        )
        .await?;
        info!(job_id = %job_id, "Deleted job");
        Ok(())
    }
}

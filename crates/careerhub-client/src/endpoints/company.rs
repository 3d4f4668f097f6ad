use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

use careerhub_core::AppResult;
use careerhub_core::types::id::CompanyId;
use careerhub_entity::company::{Company, CreateCompany, UpdateCompany};

use crate::api::CompanyApi;
use crate::client::ApiClient;
use crate::types::CompanyList;

#[async_trait]
impl CompanyApi for ApiClient {
    async fn get_by_slug(&self, slug: &str) -> AppResult<Option<Company>> {
        let result = self
            .send_json::<Option<Company>>(self.request(Method::GET, "/company").query(&[("slug", slug)]))
            .await;

        match result {
            Err(e) if e.is_not_found() => Ok(None),
            other => other,
        }
    }

    async fn get_details(&self, company_id: &CompanyId) -> AppResult<Company> {
        self.send_json(
            self.request(Method::GET, "/company/details")
                .query(&[("company_id", company_id.as_str())]),
        )
        .await
    }

    async fn create(&self, company: &CreateCompany) -> AppResult<Company> {
        let created: Company = self
            .send_json(self.request(Method::POST, "/company/create").json(company))
            .await?;
        info!(company_id = %created.id, slug = %created.slug, "Created company");
        Ok(created)
    }

    async fn update(&self, company_id: &CompanyId, mut update: UpdateCompany) -> AppResult<Company> {
        update.company_id = Some(company_id.clone());
        let updated: Company = self
            .send_json(self.request(Method::PATCH, "/company/update").json(&update))
            .await?;
        info!(company_id = %updated.id, "Updated company");
        Ok(updated)
    }

    async fn list_published(&self) -> AppResult<Vec<Company>> {
        let list: CompanyList = self
            .send_json(
                self.request(Method::GET, "/company/list")
                    .query(&[("published", "true")]),
            )
            .await?;
        Ok(list.result)
    }
}

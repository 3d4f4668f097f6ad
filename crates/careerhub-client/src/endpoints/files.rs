use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::info;

use careerhub_core::AppResult;

use crate::api::FilesApi;
use crate::client::ApiClient;
use crate::types::{FileUpload, UploadedFile};

#[async_trait]
impl FilesApi for ApiClient {
    async fn upload(&self, file: FileUpload, folder: Option<&str>) -> AppResult<UploadedFile> {
        let size = file.data.len();
        let part = Part::bytes(file.data.to_vec())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)?;

        let mut form = Form::new().part("document", part);
        if let Some(folder) = folder.filter(|f| !f.is_empty()) {
            form = form.text("folder", folder.to_string());
        }

        let uploaded: UploadedFile = self
            .send_json(self.request(Method::POST, "/files/upload").multipart(form))
            .await?;
        info!(file = %file.file_name, size, url = %uploaded.url, "Uploaded file");
        Ok(uploaded)
    }
}

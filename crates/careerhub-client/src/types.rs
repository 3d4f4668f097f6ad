//! Request and response shapes that only exist on the wire.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use careerhub_entity::company::{Asset, Company};

/// A file to upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Original file name.
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// File contents.
    pub data: Bytes,
}

/// Response of `POST /files/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Storage key or public URL.
    pub url: String,
    /// Stored file name.
    pub name: String,
    /// MIME type.
    #[serde(alias = "mimetype")]
    pub mime_type: String,
    /// Folder the file was stored in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Object key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl From<UploadedFile> for Asset {
    fn from(file: UploadedFile) -> Self {
        Self {
            url: file.url,
            name: file.name,
            mimetype: file.mime_type,
        }
    }
}

/// Envelope of `GET /company/list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CompanyList {
    #[serde(default)]
    pub result: Vec<Company>,
}

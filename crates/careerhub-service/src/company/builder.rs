//! Careers page builder: the editable copy of a company and its sections.

use tracing::debug;

use careerhub_client::UploadedFile;
use careerhub_core::AppError;
use careerhub_entity::company::{Asset, Company, Section, SectionKind, ThemeField, UpdateCompany};

use super::sections::SectionList;

/// Resolve a stored asset key into a URL.
///
/// Full `https://` URLs pass through; other keys are joined onto `base`
/// with exactly one `/`. An empty key resolves to an empty string.
pub fn resolve_asset_url(base: &str, key: &str) -> String {
    let key = key.trim();
    if key.is_empty() {
        return String::new();
    }
    if key.starts_with("https://") {
        return key.to_string();
    }
    let base = base.trim_end_matches('/');
    if key.starts_with('/') {
        format!("{base}{key}")
    } else {
        format!("{base}/{key}")
    }
}

/// Storage folder for a company's uploads: the name lowercased with each
/// whitespace character replaced by `-`.
pub fn upload_folder(company_name: &str) -> String {
    company_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Edits to a company's careers page, held locally until saved.
#[derive(Debug, Clone)]
pub struct CompanyBuilder {
    company: Company,
    sections: SectionList,
}

impl CompanyBuilder {
    /// Start editing a copy of `company`.
    pub fn new(company: Company) -> Self {
        let sections = SectionList::new(company.sections.clone());
        Self { company, sections }
    }

    /// The company as last loaded or saved.
    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut SectionList {
        &mut self.sections
    }

    /// Add a section of `kind`.
    pub fn add_section(&mut self, kind: SectionKind) -> Result<&Section, AppError> {
        self.sections.add(kind)
    }

    /// Set one theme color.
    pub fn set_theme_color(&mut self, field: ThemeField, value: &str) -> Result<(), AppError> {
        self.company.theme.set(field, value)
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.company.description = Some(description.into());
    }

    /// Use an uploaded file as the logo.
    pub fn attach_logo(&mut self, file: UploadedFile) {
        debug!(company_id = %self.company.id, url = %file.url, "Logo attached");
        self.company.logo_url = Some(Asset::from(file));
    }

    /// Use an uploaded file as the banner.
    pub fn attach_banner(&mut self, file: UploadedFile) {
        debug!(company_id = %self.company.id, url = %file.url, "Banner attached");
        self.company.banner_url = Some(Asset::from(file));
    }

    /// Folder this company's uploads go to.
    pub fn upload_folder(&self) -> String {
        upload_folder(&self.company.name)
    }

    /// The partial update that saves every builder-managed field.
    pub fn to_update(&self) -> UpdateCompany {
        UpdateCompany {
            description: self.company.description.clone(),
            logo_url: self.company.logo_url.clone(),
            banner_url: self.company.banner_url.clone(),
            theme: Some(self.company.theme.clone()),
            sections: Some(self.sections.as_slice().to_vec()),
            ..UpdateCompany::default()
        }
    }

    /// Consume the builder into its update payload.
    pub fn into_update(self) -> UpdateCompany {
        self.to_update()
    }

    /// Replace the working copy with the saved company.
    pub fn reset(&mut self, company: Company) {
        *self = Self::new(company);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Company {
        serde_json::from_value(serde_json::json!({
            "company_id": "c1",
            "name": "Acme  Labs",
            "slug": "acme-labs",
            "sections": [
                { "type": "about", "title": "About", "order": 2 },
                { "type": "hero", "title": "Hero", "order": 1 }
            ]
        }))
        .unwrap()
    }

    fn uploaded(url: &str) -> UploadedFile {
        UploadedFile {
            url: url.to_string(),
            name: "logo.png".to_string(),
            mime_type: "image/png".to_string(),
            folder: None,
            key: None,
        }
    }

    #[test]
    fn test_asset_url_resolution() {
        let base = "https://bucket.example.com";
        assert_eq!(resolve_asset_url(base, ""), "");
        assert_eq!(
            resolve_asset_url(base, "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(resolve_asset_url(base, "/acme/a.png"), "https://bucket.example.com/acme/a.png");
        assert_eq!(resolve_asset_url("https://bucket.example.com/", "acme/a.png"), "https://bucket.example.com/acme/a.png");
    }

    #[test]
    fn test_upload_folder_replaces_each_whitespace() {
        assert_eq!(upload_folder("Acme  Labs"), "acme--labs");
        assert_eq!(CompanyBuilder::new(company()).upload_folder(), "acme--labs");
    }

    #[test]
    fn test_update_carries_builder_fields() {
        let mut builder = CompanyBuilder::new(company());
        builder.set_theme_color(ThemeField::Primary, "#FF0000").unwrap();
        assert!(builder.set_theme_color(ThemeField::Text, "red").is_err());
        builder.attach_logo(uploaded("acme-labs/logo.png"));
        builder.add_section(SectionKind::Perks).unwrap();
        builder.sections_mut().move_section(2, 0).unwrap();

        let update = builder.into_update();
        assert_eq!(update.theme.unwrap().primary_color, "#ff0000");
        assert_eq!(update.logo_url.unwrap().url, "acme-labs/logo.png");
        assert!(update.banner_url.is_none());
        assert!(update.published.is_none());

        let sections = update.sections.unwrap();
        let kinds: Vec<SectionKind> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, [SectionKind::Perks, SectionKind::Hero, SectionKind::About]);
        let orders: Vec<u32> = sections.iter().map(|s| s.order).collect();
        assert_eq!(orders, [1, 2, 3]);
    }
}

//! Company pages: creation, the public page, publishing and the page builder.

pub mod builder;
pub mod publish;
pub mod sections;
pub mod service;
pub mod slug;

pub use builder::{CompanyBuilder, resolve_asset_url, upload_folder};
pub use publish::{PublishToggle, ToggleOutcome};
pub use sections::SectionList;
pub use service::{CompanyService, PublicPage};
pub use slug::slugify;

//! Company profile domain entities.

pub mod asset;
pub mod model;
pub mod publication;
pub mod section;
pub mod theme;

pub use asset::Asset;
pub use model::{Company, CreateCompany, UpdateCompany};
pub use publication::PublicationState;
pub use section::{Section, SectionKind};
pub use theme::{Theme, ThemeField};

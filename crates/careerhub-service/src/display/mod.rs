//! Presentation helpers: salary text, structured data, SEO files, currencies
//! and rich-text rendering for terminals.

pub mod currency;
pub mod salary;
pub mod seo;
pub mod structured_data;
pub mod text;

pub use currency::{CURRENCIES, Currency, find_currency, search_currencies};
pub use salary::{DEFAULT_CURRENCY, format_amount, format_salary};
pub use seo::{PageMetadata, SitemapEntry, page_metadata, robots, sitemap, sitemap_entries};
pub use structured_data::{job_postings_ld, organization_ld};
pub use text::plain_text;

pub mod config;
pub mod error;
pub mod types;
pub mod url;

pub use config::ExtractionRules;
pub use error::LinkDigestError;
pub use types::*;
pub use crate::url::{clean_url, extract_domain, is_clean_url};

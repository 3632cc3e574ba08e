pub mod error;
pub mod options;
pub mod query;

pub use error::SearchError;
pub use options::SearchOptions;
pub use query::{build, QuerySpec};

/// A single search hit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Repository {
    /// "owner/name"
    pub identifier: String,
    pub description: String,
    pub star_count: u64,
    pub language: String,
    pub url: Option<String>,
}

impl Repository {
    /// Web location, derived from the identifier when the transport did not supply one
    pub fn web_url(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("https://github.com/{}", self.identifier),
        }
    }
}

/// One page of results in server order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub items: Vec<Repository>,
    pub total_count: u64,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

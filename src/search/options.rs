use std::fmt;
use std::str::FromStr;

/// Default number of results requested per search
pub const DEFAULT_LIMIT: u32 = 30;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(r#"--in argument must be "name", "description", or "readme""#)]
    InvalidSearchIn(String),

    #[error(r#"--sort argument must be "stars", "forks", or "issues""#)]
    InvalidSort(String),

    #[error("invalid limit: {0}")]
    InvalidLimit(i64),
}

/// Which repository field the query text is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchIn {
    #[default]
    Name,
    Description,
    Readme,
}

impl SearchIn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchIn::Name => "name",
            SearchIn::Description => "description",
            SearchIn::Readme => "readme",
        }
    }
}

impl FromStr for SearchIn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SearchIn::Name),
            "description" => Ok(SearchIn::Description),
            "readme" => Ok(SearchIn::Readme),
            _ => Err(ValidationError::InvalidSearchIn(s.to_string())),
        }
    }
}

impl fmt::Display for SearchIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-side ordering; absent means relevance ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Stars,
    Forks,
    Issues,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Stars => "stars",
            SortBy::Forks => "forks",
            SortBy::Issues => "issues",
        }
    }
}

impl FromStr for SortBy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stars" => Ok(SortBy::Stars),
            "forks" => Ok(SortBy::Forks),
            "issues" => Ok(SortBy::Issues),
            _ => Err(ValidationError::InvalidSort(s.to_string())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated search input for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: String,
    pub search_in: SearchIn,
    pub topic: String,
    pub sort_by: Option<SortBy>,
    pub language: String,
    pub limit: u32,
}

impl SearchOptions {
    /// Validate raw flag values. No network work happens until this succeeds.
    pub fn new(
        query: String,
        search_in: &str,
        topic: String,
        sort_by: Option<&str>,
        language: String,
        limit: i64,
    ) -> Result<Self, ValidationError> {
        let search_in = search_in.parse::<SearchIn>()?;
        let sort_by = sort_by.map(str::parse::<SortBy>).transpose()?;

        if limit <= 0 {
            return Err(ValidationError::InvalidLimit(limit));
        }
        let limit = u32::try_from(limit).map_err(|_| ValidationError::InvalidLimit(limit))?;

        Ok(Self {
            query,
            search_in,
            topic,
            sort_by,
            language,
            limit,
        })
    }

    /// Options for a plain query with every flag at its default
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_in: SearchIn::default(),
            topic: String::new(),
            sort_by: None,
            language: String::new(),
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_in_is_case_insensitive() {
        assert_eq!("README".parse::<SearchIn>(), Ok(SearchIn::Readme));
        assert_eq!(" Description ".parse::<SearchIn>(), Ok(SearchIn::Description));
    }

    #[test]
    fn rejects_unknown_search_in() {
        let err = SearchOptions::new("cli".into(), "topics", String::new(), None, String::new(), 30)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidSearchIn("topics".into()));
        assert_eq!(
            err.to_string(),
            r#"--in argument must be "name", "description", or "readme""#
        );
    }

    #[test]
    fn rejects_unknown_or_empty_sort() {
        for bad in ["bestmatch", ""] {
            let err =
                SearchOptions::new("cli".into(), "name", String::new(), Some(bad), String::new(), 30)
                    .unwrap_err();
            assert!(matches!(err, ValidationError::InvalidSort(_)));
        }
    }

    #[test]
    fn accepts_sort_in_any_case() {
        let opts =
            SearchOptions::new("cli".into(), "name", String::new(), Some("Stars"), String::new(), 30)
                .unwrap();
        assert_eq!(opts.sort_by, Some(SortBy::Stars));
    }

    #[test]
    fn rejects_non_positive_limit() {
        for bad in [0, -3] {
            let err = SearchOptions::new("cli".into(), "name", String::new(), None, String::new(), bad)
                .unwrap_err();
            assert_eq!(err, ValidationError::InvalidLimit(bad));
        }
    }

    #[test]
    fn rejects_limit_overflowing_u32() {
        let huge = i64::from(u32::MAX) + 1;
        let err = SearchOptions::new("cli".into(), "name", String::new(), None, String::new(), huge)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidLimit(huge));
    }

    #[test]
    fn defaults_match_with_query() {
        let opts =
            SearchOptions::new("cli".into(), "name", String::new(), None, String::new(), 30).unwrap();
        assert_eq!(opts, SearchOptions::with_query("cli"));
    }
}

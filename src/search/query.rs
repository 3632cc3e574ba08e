use super::options::{SearchIn, SearchOptions, SortBy};

/// Transport-neutral request: qualifier-bearing query text plus separate sort and page size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub text: String,
    pub sort: Option<SortBy>,
    pub limit: u32,
}

/// Build the query for a search. Qualifiers are appended after the base term
/// in a fixed order: topic, in, language.
pub fn build(opts: &SearchOptions) -> QuerySpec {
    let mut clauses = vec![opts.query.clone()];

    if !opts.topic.is_empty() {
        clauses.push(format!("topic:{}", opts.topic));
    }

    // Names are searched by default, so no qualifier is needed
    if opts.search_in != SearchIn::Name {
        clauses.push(format!("in:{}", opts.search_in));
    }

    if !opts.language.is_empty() {
        clauses.push(format!("language:{}", opts.language));
    }

    let spec = QuerySpec {
        text: clauses.join(" "),
        sort: opts.sort_by,
        limit: opts.limit,
    };
    tracing::debug!(query = %spec.text, sort = ?spec.sort, limit = spec.limit, "built search query");
    spec
}

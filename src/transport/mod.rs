pub mod gh;
pub mod graphql;
pub mod rest;

pub use gh::GhCli;
pub use graphql::GraphqlTransport;
pub use rest::RestTransport;

use crate::search::{QuerySpec, SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel used to reach the repository search index
pub trait SearchTransport {
    fn kind(&self) -> TransportKind;

    /// Whether a requested sort order reaches the server
    fn honors_sort(&self) -> bool;

    /// One request, no retries
    fn search(&self, spec: &QuerySpec) -> Result<SearchResult, SearchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Rest,
    Graphql,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Rest => f.write_str("rest"),
            TransportKind::Graphql => f.write_str("graphql"),
        }
    }
}

/// Build the transport selected by configuration
pub fn connect(kind: TransportKind, gh: GhCli) -> Box<dyn SearchTransport> {
    match kind {
        TransportKind::Rest => Box::new(RestTransport::new(gh)),
        TransportKind::Graphql => Box::new(GraphqlTransport::new(gh)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_selects_implementation() {
        let rest = connect(TransportKind::Rest, GhCli::new("gh"));
        assert_eq!(rest.kind(), TransportKind::Rest);
        assert!(rest.honors_sort());

        let graphql = connect(TransportKind::Graphql, GhCli::new("gh"));
        assert_eq!(graphql.kind(), TransportKind::Graphql);
        assert!(!graphql.honors_sort());
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TransportKind::Graphql).unwrap(), "\"graphql\"");
        let kind: TransportKind = serde_json::from_str("\"rest\"").unwrap();
        assert_eq!(kind, TransportKind::Rest);
    }
}

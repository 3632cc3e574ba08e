use super::gh::GhCli;
use super::{SearchTransport, TransportKind};
use crate::search::{QuerySpec, Repository, SearchError, SearchResult};
use serde::Deserialize;

pub const SEARCH_DOCUMENT: &str = r#"query($searchQuery: String!, $first: Int!) {
  search(query: $searchQuery, type: REPOSITORY, first: $first) {
    repositoryCount
    nodes {
      ... on Repository {
        nameWithOwner
        description
        stargazerCount
        url
        primaryLanguage {
          name
        }
      }
    }
  }
}"#;

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<SearchData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: SearchConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchConnection {
    repository_count: u64,
    #[serde(default)]
    nodes: Vec<Option<RepositoryNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    name_with_owner: String,
    description: Option<String>,
    #[serde(default)]
    stargazer_count: u64,
    url: Option<String>,
    primary_language: Option<Language>,
}

#[derive(Debug, Deserialize)]
struct Language {
    name: String,
}

impl From<RepositoryNode> for Repository {
    fn from(node: RepositoryNode) -> Self {
        Self {
            identifier: node.name_with_owner,
            description: node.description.unwrap_or_default(),
            star_count: node.stargazer_count,
            language: node.primary_language.map(|l| l.name).unwrap_or_default(),
            url: node.url,
        }
    }
}

/// Search through `gh api graphql`. Ranking is relevance only.
pub struct GraphqlTransport {
    gh: GhCli,
}

impl GraphqlTransport {
    pub fn new(gh: GhCli) -> Self {
        Self { gh }
    }

    pub fn request_args(spec: &QuerySpec) -> Vec<String> {
        vec![
            "api".to_string(),
            "graphql".to_string(),
            "-f".to_string(),
            format!("query={}", SEARCH_DOCUMENT),
            "-f".to_string(),
            format!("searchQuery={}", spec.text),
            "-F".to_string(),
            format!("first={}", spec.limit),
        ]
    }

    pub fn decode(body: &[u8]) -> Result<SearchResult, SearchError> {
        let response: GraphqlResponse = serde_json::from_slice(body)?;

        let data = match (response.data, response.errors) {
            (Some(data), _) => data,
            (None, Some(errors)) => {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(SearchError::request(messages.join("; ")));
            }
            (None, None) => {
                return Err(SearchError::DecodeFailure(serde::de::Error::custom(
                    "response has neither data nor errors",
                )))
            }
        };

        Ok(SearchResult {
            items: data
                .search
                .nodes
                .into_iter()
                .flatten()
                .map(Repository::from)
                .collect(),
            total_count: data.search.repository_count,
        })
    }
}

impl SearchTransport for GraphqlTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Graphql
    }

    fn honors_sort(&self) -> bool {
        false
    }

    fn search(&self, spec: &QuerySpec) -> Result<SearchResult, SearchError> {
        let body = self.gh.run(&Self::request_args(spec))?;
        let result = Self::decode(&body)?;
        tracing::debug!(
            items = result.items.len(),
            total = result.total_count,
            "decoded GraphQL search response"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::options::SortBy;

    #[test]
    fn args_use_typed_first_variable() {
        let spec = QuerySpec {
            text: "cli language:go".into(),
            sort: Some(SortBy::Stars),
            limit: 7,
        };
        let args = GraphqlTransport::request_args(&spec);

        assert_eq!(&args[..2], ["api", "graphql"]);
        assert!(args.contains(&"searchQuery=cli language:go".to_string()));
        assert_eq!(&args[args.len() - 2..], ["-F", "first=7"]);
        assert!(!args.iter().any(|a| a.starts_with("sort=")));
    }

    #[test]
    fn document_requests_repository_fields() {
        for field in ["nameWithOwner", "stargazerCount", "description", "primaryLanguage", "repositoryCount"] {
            assert!(SEARCH_DOCUMENT.contains(field), "missing {field}");
        }
    }

    #[test]
    fn decodes_nodes() {
        let body = br#"{
            "data": {
                "search": {
                    "repositoryCount": 42,
                    "nodes": [
                        {
                            "nameWithOwner": "BurntSushi/ripgrep",
                            "description": "fast grep",
                            "stargazerCount": 2500,
                            "url": "https://github.com/BurntSushi/ripgrep",
                            "primaryLanguage": {"name": "Rust"}
                        },
                        {
                            "nameWithOwner": "someone/empty",
                            "description": null,
                            "stargazerCount": 0,
                            "primaryLanguage": null
                        },
                        null
                    ]
                }
            }
        }"#;

        let result = GraphqlTransport::decode(body).unwrap();
        assert_eq!(result.total_count, 42);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].identifier, "BurntSushi/ripgrep");
        assert_eq!(result.items[0].language, "Rust");
        assert_eq!(result.items[0].star_count, 2500);
        assert_eq!(result.items[1].language, "");
        assert_eq!(result.items[1].url, None);
    }

    #[test]
    fn errors_without_data_are_request_failures() {
        let body = br#"{"errors": [{"message": "Something went wrong"}, {"message": "again"}]}"#;
        let err = GraphqlTransport::decode(body).unwrap_err();
        assert!(matches!(err, SearchError::RequestFailed { .. }));
        assert!(err.to_string().contains("Something went wrong; again"));
    }

    #[test]
    fn empty_object_is_decode_failure() {
        let err = GraphqlTransport::decode(b"{}").unwrap_err();
        assert!(matches!(err, SearchError::DecodeFailure(_)));
    }

    #[test]
    fn does_not_honor_sort() {
        let transport = GraphqlTransport::new(GhCli::new("gh"));
        assert!(!transport.honors_sort());
        assert_eq!(transport.kind(), TransportKind::Graphql);
    }
}

use super::gh::GhCli;
use super::{SearchTransport, TransportKind};
use crate::search::{QuerySpec, Repository, SearchError, SearchResult};
use serde::Deserialize;

const SEARCH_ENDPOINT: &str = "search/repositories";
/// Response cache hint handed to gh; results within this window may be stale
const CACHE_TTL: &str = "5m";

#[derive(Debug, Deserialize)]
struct RestSearchResponse {
    total_count: u64,
    #[serde(default)]
    items: Vec<RestRepository>,
}

#[derive(Debug, Deserialize)]
struct RestRepository {
    full_name: String,
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    html_url: Option<String>,
    language: Option<String>,
}

impl From<RestRepository> for Repository {
    fn from(repo: RestRepository) -> Self {
        Self {
            identifier: repo.full_name,
            description: repo.description.unwrap_or_default(),
            star_count: repo.stargazers_count,
            language: repo.language.unwrap_or_default(),
            url: repo.html_url,
        }
    }
}

/// Search through `gh api` against the REST search endpoint
pub struct RestTransport {
    gh: GhCli,
}

impl RestTransport {
    pub fn new(gh: GhCli) -> Self {
        Self { gh }
    }

    pub fn request_args(spec: &QuerySpec) -> Vec<String> {
        let mut args = vec![
            "api".to_string(),
            "-X".to_string(),
            "GET".to_string(),
            SEARCH_ENDPOINT.to_string(),
            "--cache".to_string(),
            CACHE_TTL.to_string(),
            "-f".to_string(),
            format!("q={}", spec.text),
            "-f".to_string(),
            format!("per_page={}", spec.limit),
        ];

        if let Some(sort) = spec.sort {
            args.push("-f".to_string());
            args.push(format!("sort={}", sort.as_str()));
        }

        args
    }

    pub fn decode(body: &[u8]) -> Result<SearchResult, SearchError> {
        let response: RestSearchResponse = serde_json::from_slice(body)?;
        Ok(SearchResult {
            items: response.items.into_iter().map(Repository::from).collect(),
            total_count: response.total_count,
        })
    }
}

impl SearchTransport for RestTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Rest
    }

    fn honors_sort(&self) -> bool {
        true
    }

    fn search(&self, spec: &QuerySpec) -> Result<SearchResult, SearchError> {
        let body = self.gh.run(&Self::request_args(spec))?;
        let result = Self::decode(&body)?;
        tracing::debug!(
            items = result.items.len(),
            total = result.total_count,
            "decoded REST search response"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::options::SortBy;

    fn spec(text: &str, sort: Option<SortBy>, limit: u32) -> QuerySpec {
        QuerySpec {
            text: text.to_string(),
            sort,
            limit,
        }
    }

    #[test]
    fn args_without_sort() {
        let args = RestTransport::request_args(&spec("cli topic:hacktoberfest", None, 30));
        assert_eq!(
            args,
            vec![
                "api",
                "-X",
                "GET",
                "search/repositories",
                "--cache",
                "5m",
                "-f",
                "q=cli topic:hacktoberfest",
                "-f",
                "per_page=30",
            ]
        );
    }

    #[test]
    fn args_carry_sort_as_separate_field() {
        let args = RestTransport::request_args(&spec("cli", Some(SortBy::Stars), 10));
        assert_eq!(&args[args.len() - 2..], ["-f", "sort=stars"]);
        assert!(args.contains(&"q=cli".to_string()));
    }

    #[test]
    fn decodes_items_in_server_order() {
        let body = br#"{
            "total_count": 1234,
            "incomplete_results": false,
            "items": [
                {
                    "full_name": "cli/cli",
                    "description": "GitHub's official command line tool",
                    "stargazers_count": 37000,
                    "html_url": "https://github.com/cli/cli",
                    "language": "Go"
                },
                {
                    "full_name": "someone/tiny",
                    "description": null,
                    "stargazers_count": 3,
                    "html_url": "https://github.com/someone/tiny",
                    "language": null
                }
            ]
        }"#;

        let result = RestTransport::decode(body).unwrap();
        assert_eq!(result.total_count, 1234);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].identifier, "cli/cli");
        assert_eq!(result.items[0].language, "Go");
        assert_eq!(
            result.items[0].url.as_deref(),
            Some("https://github.com/cli/cli")
        );
        assert_eq!(result.items[1].identifier, "someone/tiny");
        assert_eq!(result.items[1].description, "");
        assert_eq!(result.items[1].language, "");
    }

    #[test]
    fn empty_result_decodes() {
        let result = RestTransport::decode(br#"{"total_count": 0, "items": []}"#).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn malformed_body_is_decode_failure() {
        let err = RestTransport::decode(b"<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, SearchError::DecodeFailure(_)));
    }

    #[cfg(unix)]
    #[test]
    fn search_runs_gh_with_request_args() {
        use crate::transport::test_support::{fake_gh, recorded_args};

        let dir = tempfile::tempdir().unwrap();
        let gh = fake_gh(
            dir.path(),
            r#"printf '%s\n' "$@" > "$(dirname "$0")/args.txt"
cat <<'EOF'
{"total_count": 1, "items": [{"full_name": "a/b", "stargazers_count": 1500}]}
EOF"#,
        );
        let transport = RestTransport::new(GhCli::locate_in(Some(gh.as_path()), None).unwrap());

        let query = spec("cli", Some(SortBy::Forks), 5);
        let result = transport.search(&query).unwrap();
        assert_eq!(result.items[0].identifier, "a/b");
        assert_eq!(result.items[0].star_count, 1500);
        assert_eq!(recorded_args(dir.path()), RestTransport::request_args(&query));
    }
}

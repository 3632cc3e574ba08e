use crate::search::Repository;
use colored::Colorize;
use std::borrow::Cow;

/// Longest description shown in a label, ellipsis included
pub const DESCRIPTION_LIMIT: usize = 100;
const ELLIPSIS: &str = "...";

pub const LANGUAGE_PREFIX: &str = "Language: ";
pub const STAR: &str = "★";

/// Render one search hit as a multi-line menu label.
///
/// Lines: `<rank> <identifier>`, the description (possibly empty), an optional
/// `Language: <language>` line, and the star count. `color` controls ANSI
/// styling and is the only input besides the record itself.
pub fn format_label(rank: usize, repo: &Repository, color: bool) -> String {
    let identifier = if color {
        repo.identifier.green().to_string()
    } else {
        repo.identifier.clone()
    };

    let mut lines = vec![
        format!("{} {}", rank, identifier),
        truncate_description(&repo.description).into_owned(),
    ];

    if !repo.language.is_empty() {
        let language = if color {
            repo.language.blue().to_string()
        } else {
            repo.language.clone()
        };
        lines.push(format!("{}{}", LANGUAGE_PREFIX, language));
    }

    let stars = format_stars(repo.star_count);
    lines.push(if color {
        stars.yellow().to_string()
    } else {
        stars
    });

    lines.join("\n")
}

/// Cut descriptions longer than [`DESCRIPTION_LIMIT`] characters to exactly that length
pub fn truncate_description(description: &str) -> Cow<'_, str> {
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return Cow::Borrowed(description);
    }

    let keep = DESCRIPTION_LIMIT - ELLIPSIS.len();
    let mut truncated: String = description.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

pub fn format_stars(count: u64) -> String {
    if count >= 1000 {
        format!("{} {:.1}k", STAR, count as f64 / 1000.0)
    } else {
        format!("{} {}", STAR, count)
    }
}

/// Untruncated details for the selector's preview pane
pub fn preview_text(repo: &Repository) -> String {
    let mut out = format!("{}\n\n", repo.identifier);

    if repo.description.is_empty() {
        out.push_str("No description provided.\n");
    } else {
        out.push_str(&repo.description);
        out.push('\n');
    }
    out.push('\n');

    if !repo.language.is_empty() {
        out.push_str(&format!("{}{}\n", LANGUAGE_PREFIX, repo.language));
    }
    out.push_str(&format!("Stars: {}\n", repo.star_count));
    out.push_str(&format!("URL: {}\n", repo.web_url()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(description: &str, language: &str, stars: u64) -> Repository {
        Repository {
            identifier: "cli/cli".into(),
            description: description.into(),
            star_count: stars,
            language: language.into(),
            url: Some("https://github.com/cli/cli".into()),
        }
    }

    #[test]
    fn plain_label_layout() {
        let label = format_label(3, &repo("GitHub's official CLI", "Go", 2500), false);
        assert_eq!(label, "3 cli/cli\nGitHub's official CLI\nLanguage: Go\n★ 2.5k");
    }

    #[test]
    fn language_line_is_optional_and_description_may_be_empty() {
        let label = format_label(1, &repo("", "", 7), false);
        assert_eq!(label, "1 cli/cli\n\n★ 7");
    }

    #[test]
    fn short_descriptions_are_unchanged() {
        for len in [0, 1, 99, 100] {
            let text = "a".repeat(len);
            assert_eq!(truncate_description(&text), text.as_str());
        }
    }

    #[test]
    fn long_descriptions_are_cut_to_limit() {
        for len in [101, 150, 1000] {
            let text = "b".repeat(len);
            let cut = truncate_description(&text);
            assert_eq!(cut.chars().count(), DESCRIPTION_LIMIT);
            assert!(cut.ends_with("..."));
            assert!(cut.starts_with(&"b".repeat(97)));
        }
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(120);
        let cut = truncate_description(&text);
        assert_eq!(cut.chars().count(), DESCRIPTION_LIMIT);
        assert_eq!(cut.chars().filter(|c| *c == 'é').count(), 97);
    }

    #[test]
    fn label_second_line_is_truncated() {
        let label = format_label(1, &repo(&"x".repeat(140), "", 0), false);
        let second = label.lines().nth(1).unwrap();
        assert_eq!(second.chars().count(), 100);
        assert!(second.ends_with("..."));
    }

    #[test]
    fn star_formatting() {
        assert_eq!(format_stars(0), "★ 0");
        assert_eq!(format_stars(999), "★ 999");
        assert_eq!(format_stars(1000), "★ 1.0k");
        assert_eq!(format_stars(2500), "★ 2.5k");
        assert_eq!(format_stars(123_456), "★ 123.5k");
    }

    #[test]
    fn colored_label_keeps_text() {
        let label = format_label(12, &repo("desc", "Rust", 5), true);
        assert!(label.starts_with("12 "));
        assert!(label.contains("cli/cli"));
        assert!(label.contains("Rust"));
        assert_eq!(label.lines().count(), 4);
    }

    #[test]
    fn preview_shows_full_details() {
        let long = "z".repeat(150);
        let preview = preview_text(&repo(&long, "Go", 37_012));
        assert!(preview.contains(&long));
        assert!(preview.contains("Stars: 37012"));
        assert!(preview.contains("URL: https://github.com/cli/cli"));
        assert!(preview.contains("Language: Go"));
    }

    #[test]
    fn preview_without_description() {
        let preview = preview_text(&repo("", "", 1));
        assert!(preview.contains("No description provided."));
        assert!(!preview.contains(LANGUAGE_PREFIX));
    }
}

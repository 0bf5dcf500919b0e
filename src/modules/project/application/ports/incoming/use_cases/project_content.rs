use std::fmt;

use crate::shared::validation::is_http_url;

//
// ──────────────────────────────────────────────────────────
// Shared validated project fields (create + update)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectContent {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub screenshots: Vec<String>,
    pub repo_url: Option<String>,
    pub live_demo_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectContentError {
    EmptyTitle,
    TitleTooLong,
    EmptyDescription,
    InvalidUrl(&'static str),
    InvalidScreenshotUrl(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ProjectContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectContentError::EmptyTitle => write!(f, "Title cannot be empty"),
            ProjectContentError::TitleTooLong => {
                write!(f, "Title must not exceed 150 characters")
            }
            ProjectContentError::EmptyDescription => write!(f, "Description cannot be empty"),
            ProjectContentError::InvalidUrl(field) => {
                write!(f, "Field `{}` must be a valid http(s) URL", field)
            }
            ProjectContentError::InvalidScreenshotUrl(url) => {
                write!(f, "Screenshot `{}` is not a valid http(s) URL", url)
            }
        }
    }
}

fn clean_optional_url(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<String>, ProjectContentError> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(url) if !is_http_url(&url) => Err(ProjectContentError::InvalidUrl(field)),
        other => Ok(other),
    }
}

impl ProjectContent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: String,
        tech_stack: Vec<String>,
        screenshots: Vec<String>,
        repo_url: Option<String>,
        live_demo_url: Option<String>,
        featured: bool,
    ) -> Result<Self, ProjectContentError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(ProjectContentError::EmptyTitle);
        }
        if title.len() > 150 {
            return Err(ProjectContentError::TitleTooLong);
        }

        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(ProjectContentError::EmptyDescription);
        }

        let tech_stack: Vec<String> = tech_stack
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let screenshots: Vec<String> = screenshots
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for shot in &screenshots {
            if !is_http_url(shot) {
                return Err(ProjectContentError::InvalidScreenshotUrl(shot.clone()));
            }
        }

        Ok(Self {
            title,
            description,
            tech_stack,
            screenshots,
            repo_url: clean_optional_url(repo_url, "repo_url")?,
            live_demo_url: clean_optional_url(live_demo_url, "live_demo_url")?,
            featured,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlugError {
    EmptySlug,
    SlugTooLong,
    InvalidSlug,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for SlugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugError::EmptySlug => write!(f, "Slug cannot be empty"),
            SlugError::SlugTooLong => write!(f, "Slug must not exceed 150 characters"),
            SlugError::InvalidSlug => write!(
                f,
                "Slug may only contain lowercase letters, digits and single dashes"
            ),
        }
    }
}

/// Lowercases and validates a slug: `[a-z0-9]` runs joined by single
/// dashes.
pub fn normalize_slug(input: &str) -> Result<String, SlugError> {
    let slug = input.trim().to_lowercase();
    if slug.is_empty() {
        return Err(SlugError::EmptySlug);
    }
    if slug.len() > 150 {
        return Err(SlugError::SlugTooLong);
    }

    let valid = slug.split('-').all(|segment| {
        !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric())
    }) && slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !valid {
        return Err(SlugError::InvalidSlug);
    }

    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(title: &str, description: &str) -> Result<ProjectContent, ProjectContentError> {
        ProjectContent::new(
            title.to_string(),
            description.to_string(),
            vec!["Rust".to_string()],
            vec![],
            None,
            None,
            false,
        )
    }

    #[test]
    fn test_rejects_empty_title_and_description() {
        assert_eq!(content("  ", "desc"), Err(ProjectContentError::EmptyTitle));
        assert_eq!(
            content("Title", " "),
            Err(ProjectContentError::EmptyDescription)
        );
    }

    #[test]
    fn test_rejects_invalid_urls() {
        let result = ProjectContent::new(
            "T".to_string(),
            "D".to_string(),
            vec![],
            vec!["not-a-url".to_string()],
            None,
            None,
            false,
        );
        assert!(matches!(
            result,
            Err(ProjectContentError::InvalidScreenshotUrl(_))
        ));

        let result = ProjectContent::new(
            "T".to_string(),
            "D".to_string(),
            vec![],
            vec![],
            Some("ftp://x".to_string()),
            None,
            false,
        );
        assert_eq!(result.unwrap_err(), ProjectContentError::InvalidUrl("repo_url"));
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("  My-Project ").unwrap(), "my-project");
        assert_eq!(normalize_slug("a1-b2-c3").unwrap(), "a1-b2-c3");
        assert_eq!(normalize_slug(""), Err(SlugError::EmptySlug));
        assert_eq!(normalize_slug("-leading"), Err(SlugError::InvalidSlug));
        assert_eq!(normalize_slug("double--dash"), Err(SlugError::InvalidSlug));
        assert_eq!(normalize_slug("has space"), Err(SlugError::InvalidSlug));
    }
}

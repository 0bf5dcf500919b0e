use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::category::Category;
use crate::modules::catalog::domain::item::{
    check_required, CatalogFamily, ItemDraft, ItemValidationError,
};
use crate::shared::validation::is_http_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCategory {
    ProjectDemo,
    TechTalk,
    Tutorial,
}

impl Category for VideoCategory {
    const FAMILY: &'static str = "videos";

    fn all() -> &'static [Self] {
        &[Self::ProjectDemo, Self::TechTalk, Self::Tutorial]
    }

    fn tag(self) -> &'static str {
        match self {
            Self::ProjectDemo => "projectDemo",
            Self::TechTalk => "techTalk",
            Self::Tutorial => "tutorial",
        }
    }

    fn collection(self) -> &'static str {
        match self {
            Self::ProjectDemo => "projectDemos",
            Self::TechTalk => "techTalks",
            Self::Tutorial => "tutorials",
        }
    }

    fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::ProjectDemo | Self::TechTalk | Self::Tutorial => &["name", "video_url"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum VideoDetails {
    ProjectDemo {
        video_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        repo_url: Option<String>,
    },
    TechTalk {
        video_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        event: Option<String>,
    },
    Tutorial {
        video_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        series: Option<String>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Videos;

impl CatalogFamily for Videos {
    const NAME: &'static str = "videos";

    type Category = VideoCategory;
    type Details = VideoDetails;

    fn category_of(details: &Self::Details) -> Self::Category {
        match details {
            VideoDetails::ProjectDemo { .. } => VideoCategory::ProjectDemo,
            VideoDetails::TechTalk { .. } => VideoCategory::TechTalk,
            VideoDetails::Tutorial { .. } => VideoCategory::Tutorial,
        }
    }

    fn build_details(
        category: Self::Category,
        draft: &ItemDraft,
    ) -> Result<Self::Details, ItemValidationError> {
        check_required(category, draft)?;

        let video_url = draft.value_of("video_url").unwrap_or_default();
        if !is_http_url(&video_url) {
            return Err(ItemValidationError::InvalidUrl { field: "video_url" });
        }

        Ok(match category {
            VideoCategory::ProjectDemo => {
                let repo_url = draft.value_of("repo_url");
                if let Some(url) = repo_url.as_deref() {
                    if !is_http_url(url) {
                        return Err(ItemValidationError::InvalidUrl { field: "repo_url" });
                    }
                }
                VideoDetails::ProjectDemo { video_url, repo_url }
            }
            VideoCategory::TechTalk => VideoDetails::TechTalk {
                video_url,
                event: draft.value_of("event"),
            },
            VideoCategory::Tutorial => VideoDetails::Tutorial {
                video_url,
                series: draft.value_of("series"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::category::assert_collection_bijection;

    #[test]
    fn test_collections_are_a_bijection() {
        assert_collection_bijection::<VideoCategory>();
    }

    #[test]
    fn test_camel_case_tags_parse() {
        assert_eq!(
            VideoCategory::parse("projectDemo").unwrap(),
            VideoCategory::ProjectDemo
        );
        assert_eq!(
            VideoCategory::parse("techTalks").unwrap(),
            VideoCategory::TechTalk
        );
        assert!(VideoCategory::parse("projectdemo").is_err());
    }

    #[test]
    fn test_video_url_is_required_and_validated() {
        let missing: ItemDraft = serde_json::from_str(r#"{"title": "Demo"}"#).unwrap();
        assert_eq!(
            Videos::build_details(VideoCategory::ProjectDemo, &missing).unwrap_err(),
            ItemValidationError::MissingField("video_url")
        );

        let invalid: ItemDraft =
            serde_json::from_str(r#"{"title": "Demo", "video_url": "rtsp://x"}"#).unwrap();
        assert_eq!(
            Videos::build_details(VideoCategory::ProjectDemo, &invalid).unwrap_err(),
            ItemValidationError::InvalidUrl { field: "video_url" }
        );
    }

    #[test]
    fn test_tutorial_with_series() {
        let draft: ItemDraft = serde_json::from_str(
            r#"{"name": "Lifetimes pt. 3", "video_url": "https://videos.example.com/lt3", "series": "Rust basics"}"#,
        )
        .unwrap();

        let details = Videos::build_details(VideoCategory::Tutorial, &draft).unwrap();
        assert_eq!(
            details,
            VideoDetails::Tutorial {
                video_url: "https://videos.example.com/lt3".to_string(),
                series: Some("Rust basics".to_string()),
            }
        );
    }
}

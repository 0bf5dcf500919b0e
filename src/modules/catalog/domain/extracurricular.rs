use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::category::Category;
use crate::modules::catalog::domain::item::{
    check_required, CatalogFamily, ItemDraft, ItemValidationError,
};
use crate::shared::validation::is_http_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtracurricularCategory {
    OpenSource,
    Community,
    Hackathons,
    Speaking,
    Publications,
}

impl Category for ExtracurricularCategory {
    const FAMILY: &'static str = "extracurriculars";

    fn all() -> &'static [Self] {
        &[
            Self::OpenSource,
            Self::Community,
            Self::Hackathons,
            Self::Speaking,
            Self::Publications,
        ]
    }

    fn tag(self) -> &'static str {
        match self {
            Self::OpenSource => "openSource",
            Self::Community => "community",
            Self::Hackathons => "hackathons",
            Self::Speaking => "speaking",
            Self::Publications => "publications",
        }
    }

    // This family never grew separate collection names; tags double as
    // sub-collection keys.
    fn collection(self) -> &'static str {
        self.tag()
    }

    fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::OpenSource => &["name", "description"],
            Self::Community => &["name", "organization"],
            Self::Hackathons => &["name", "description"],
            Self::Speaking => &["name", "event"],
            Self::Publications => &["name", "publisher", "date"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum ExtracurricularDetails {
    OpenSource {
        #[serde(skip_serializing_if = "Option::is_none")]
        repo_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stars: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        contributors: Option<u32>,
    },
    Community {
        organization: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        role: Option<String>,
    },
    Hackathons {
        #[serde(skip_serializing_if = "Option::is_none")]
        placement: Option<String>,
    },
    Speaking {
        event: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        venue: Option<String>,
    },
    Publications {
        publisher: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        publication_url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Extracurriculars;

impl CatalogFamily for Extracurriculars {
    const NAME: &'static str = "extracurriculars";

    type Category = ExtracurricularCategory;
    type Details = ExtracurricularDetails;

    fn category_of(details: &Self::Details) -> Self::Category {
        match details {
            ExtracurricularDetails::OpenSource { .. } => ExtracurricularCategory::OpenSource,
            ExtracurricularDetails::Community { .. } => ExtracurricularCategory::Community,
            ExtracurricularDetails::Hackathons { .. } => ExtracurricularCategory::Hackathons,
            ExtracurricularDetails::Speaking { .. } => ExtracurricularCategory::Speaking,
            ExtracurricularDetails::Publications { .. } => ExtracurricularCategory::Publications,
        }
    }

    fn build_details(
        category: Self::Category,
        draft: &ItemDraft,
    ) -> Result<Self::Details, ItemValidationError> {
        check_required(category, draft)?;

        match category {
            ExtracurricularCategory::OpenSource => {
                let repo_url = draft.value_of("repo_url");
                if let Some(url) = repo_url.as_deref() {
                    if !is_http_url(url) {
                        return Err(ItemValidationError::InvalidUrl { field: "repo_url" });
                    }
                }

                Ok(ExtracurricularDetails::OpenSource {
                    repo_url,
                    stars: draft.count_of("stars")?,
                    contributors: draft.count_of("contributors")?,
                })
            }

            ExtracurricularCategory::Community => Ok(ExtracurricularDetails::Community {
                organization: draft.value_of("organization").unwrap_or_default(),
                role: draft.value_of("role"),
            }),

            ExtracurricularCategory::Hackathons => Ok(ExtracurricularDetails::Hackathons {
                placement: draft.value_of("placement"),
            }),

            ExtracurricularCategory::Speaking => Ok(ExtracurricularDetails::Speaking {
                event: draft.value_of("event").unwrap_or_default(),
                venue: draft.value_of("venue"),
            }),

            ExtracurricularCategory::Publications => Ok(ExtracurricularDetails::Publications {
                publisher: draft.value_of("publisher").unwrap_or_default(),
                publication_url: draft.value_of("publication_url"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::category::assert_collection_bijection;

    #[test]
    fn test_collections_are_a_bijection() {
        assert_collection_bijection::<ExtracurricularCategory>();
    }

    #[test]
    fn test_tag_spelling_is_preserved() {
        assert_eq!(ExtracurricularCategory::OpenSource.tag(), "openSource");
        assert_eq!(
            ExtracurricularCategory::parse("openSource").unwrap(),
            ExtracurricularCategory::OpenSource
        );
    }

    #[test]
    fn test_open_source_accepts_string_stars() {
        let draft: ItemDraft = serde_json::from_str(
            r#"{"project": "lib", "description": "y", "stars": "10", "contributors": 2}"#,
        )
        .unwrap();

        let details =
            Extracurriculars::build_details(ExtracurricularCategory::OpenSource, &draft).unwrap();
        assert_eq!(
            details,
            ExtracurricularDetails::OpenSource {
                repo_url: None,
                stars: Some(10),
                contributors: Some(2),
            }
        );
    }

    #[test]
    fn test_open_source_rejects_non_numeric_stars() {
        let draft: ItemDraft =
            serde_json::from_str(r#"{"project": "lib", "description": "y", "stars": "lots"}"#)
                .unwrap();

        let result = Extracurriculars::build_details(ExtracurricularCategory::OpenSource, &draft);
        assert!(matches!(
            result,
            Err(ItemValidationError::InvalidValue { field: "stars", .. })
        ));
    }

    #[test]
    fn test_publications_require_publisher_and_date() {
        let missing_publisher: ItemDraft =
            serde_json::from_str(r#"{"title": "Paper", "date": "2024-05-01"}"#).unwrap();
        assert_eq!(
            Extracurriculars::build_details(
                ExtracurricularCategory::Publications,
                &missing_publisher
            )
            .unwrap_err(),
            ItemValidationError::MissingField("publisher")
        );

        let missing_date: ItemDraft =
            serde_json::from_str(r#"{"title": "Paper", "publisher": "ACM"}"#).unwrap();
        assert_eq!(
            Extracurriculars::build_details(ExtracurricularCategory::Publications, &missing_date)
                .unwrap_err(),
            ItemValidationError::MissingField("date")
        );
    }

    #[test]
    fn test_speaking_event_feeds_both_name_and_details() {
        let draft: ItemDraft = serde_json::from_str(r#"{"event": "RustConf"}"#).unwrap();

        let details =
            Extracurriculars::build_details(ExtracurricularCategory::Speaking, &draft).unwrap();
        assert_eq!(
            details,
            ExtracurricularDetails::Speaking {
                event: "RustConf".to_string(),
                venue: None,
            }
        );
        // The event name also satisfies the display-name fallback
        assert_eq!(draft.display_name().as_deref(), Some("RustConf"));
    }

    #[test]
    fn test_details_tag_round_trip() {
        let details = ExtracurricularDetails::OpenSource {
            repo_url: None,
            stars: Some(10),
            contributors: None,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["category"], "openSource");

        let back: ExtracurricularDetails = serde_json::from_value(json).unwrap();
        assert_eq!(back, details);
    }
}

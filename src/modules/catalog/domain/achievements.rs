use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::category::Category;
use crate::modules::catalog::domain::item::{
    check_required, CatalogFamily, ItemDraft, ItemValidationError,
};
use crate::shared::validation::is_http_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    Award,
    Certification,
    Milestone,
}

impl Category for AchievementCategory {
    const FAMILY: &'static str = "achievements";

    fn all() -> &'static [Self] {
        &[Self::Award, Self::Certification, Self::Milestone]
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Award => "award",
            Self::Certification => "certification",
            Self::Milestone => "milestone",
        }
    }

    fn collection(self) -> &'static str {
        match self {
            Self::Award => "awards",
            Self::Certification => "certifications",
            Self::Milestone => "milestones",
        }
    }

    fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Award => &["name", "description"],
            Self::Certification => &["name", "issuer"],
            Self::Milestone => &["name", "date"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum AchievementDetails {
    Award {
        #[serde(skip_serializing_if = "Option::is_none")]
        issuer: Option<String>,
    },
    Certification {
        issuer: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        credential_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        credential_url: Option<String>,
    },
    Milestone {},
}

#[derive(Debug, Clone, Copy)]
pub struct Achievements;

impl CatalogFamily for Achievements {
    const NAME: &'static str = "achievements";

    type Category = AchievementCategory;
    type Details = AchievementDetails;

    fn category_of(details: &Self::Details) -> Self::Category {
        match details {
            AchievementDetails::Award { .. } => AchievementCategory::Award,
            AchievementDetails::Certification { .. } => AchievementCategory::Certification,
            AchievementDetails::Milestone {} => AchievementCategory::Milestone,
        }
    }

    fn build_details(
        category: Self::Category,
        draft: &ItemDraft,
    ) -> Result<Self::Details, ItemValidationError> {
        check_required(category, draft)?;

        match category {
            AchievementCategory::Award => Ok(AchievementDetails::Award {
                issuer: draft.value_of("issuer"),
            }),

            AchievementCategory::Certification => {
                let credential_url = draft.value_of("credential_url");
                if let Some(url) = credential_url.as_deref() {
                    if !is_http_url(url) {
                        return Err(ItemValidationError::InvalidUrl {
                            field: "credential_url",
                        });
                    }
                }

                Ok(AchievementDetails::Certification {
                    // Present; checked by the required-fields gate
                    issuer: draft.value_of("issuer").unwrap_or_default(),
                    credential_id: draft.value_of("credential_id"),
                    credential_url,
                })
            }

            AchievementCategory::Milestone => Ok(AchievementDetails::Milestone {}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::category::assert_collection_bijection;

    #[test]
    fn test_collections_are_a_bijection() {
        assert_collection_bijection::<AchievementCategory>();
    }

    #[test]
    fn test_parse_accepts_tag_and_collection_spelling() {
        assert_eq!(
            AchievementCategory::parse("award").unwrap(),
            AchievementCategory::Award
        );
        assert_eq!(
            AchievementCategory::parse("awards").unwrap(),
            AchievementCategory::Award
        );
        assert_eq!(
            AchievementCategory::parse("certifications").unwrap(),
            AchievementCategory::Certification
        );
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = AchievementCategory::parse("trophies").unwrap_err();
        assert_eq!(err.family, "achievements");
        assert_eq!(err.given, "trophies");
    }

    #[test]
    fn test_award_requires_description() {
        let draft: ItemDraft =
            serde_json::from_str(r#"{"title": "Best Demo", "issuer": "Conf"}"#).unwrap();

        let result = Achievements::build_details(AchievementCategory::Award, &draft);
        assert_eq!(
            result.unwrap_err(),
            ItemValidationError::MissingField("description")
        );
    }

    #[test]
    fn test_certification_without_issuer_is_rejected() {
        let draft: ItemDraft = serde_json::from_str(
            r#"{"title": "Cloud Cert", "description": "x", "date": "2024-01-01"}"#,
        )
        .unwrap();

        let result = Achievements::build_details(AchievementCategory::Certification, &draft);
        assert_eq!(
            result.unwrap_err(),
            ItemValidationError::MissingField("issuer")
        );
    }

    #[test]
    fn test_certification_builds_with_issuer() {
        let draft: ItemDraft = serde_json::from_str(
            r#"{"name": "Cloud Cert", "issuer": "Examiner", "credential_id": "ABC-1"}"#,
        )
        .unwrap();

        let details =
            Achievements::build_details(AchievementCategory::Certification, &draft).unwrap();
        assert_eq!(
            details,
            AchievementDetails::Certification {
                issuer: "Examiner".to_string(),
                credential_id: Some("ABC-1".to_string()),
                credential_url: None,
            }
        );
        assert_eq!(
            Achievements::category_of(&details),
            AchievementCategory::Certification
        );
    }

    #[test]
    fn test_certification_rejects_bad_credential_url() {
        let draft: ItemDraft = serde_json::from_str(
            r#"{"name": "Cloud Cert", "issuer": "Examiner", "credential_url": "not a url"}"#,
        )
        .unwrap();

        let result = Achievements::build_details(AchievementCategory::Certification, &draft);
        assert_eq!(
            result.unwrap_err(),
            ItemValidationError::InvalidUrl {
                field: "credential_url"
            }
        );
    }

    #[test]
    fn test_details_serialize_with_category_tag() {
        let json = serde_json::to_value(AchievementDetails::Award {
            issuer: Some("Conf".to_string()),
        })
        .unwrap();
        assert_eq!(json["category"], "award");
        assert_eq!(json["issuer"], "Conf");
    }
}

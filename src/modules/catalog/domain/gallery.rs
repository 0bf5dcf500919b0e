use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::category::Category;
use crate::modules::catalog::domain::item::{
    check_required, CatalogFamily, ItemDraft, ItemValidationError,
};
use crate::shared::validation::is_http_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCategory {
    Profile,
    Project,
    Event,
}

impl Category for GalleryCategory {
    const FAMILY: &'static str = "gallery";

    fn all() -> &'static [Self] {
        &[Self::Profile, Self::Project, Self::Event]
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Project => "project",
            Self::Event => "event",
        }
    }

    fn collection(self) -> &'static str {
        match self {
            Self::Profile => "profileShots",
            Self::Project => "projectShots",
            Self::Event => "eventShots",
        }
    }

    fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Profile | Self::Project | Self::Event => &["name", "image_url"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum GalleryDetails {
    Profile {
        image_url: String,
    },
    Project {
        image_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        project_title: Option<String>,
    },
    Event {
        image_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        event_name: Option<String>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Gallery;

impl CatalogFamily for Gallery {
    const NAME: &'static str = "gallery";

    type Category = GalleryCategory;
    type Details = GalleryDetails;

    fn category_of(details: &Self::Details) -> Self::Category {
        match details {
            GalleryDetails::Profile { .. } => GalleryCategory::Profile,
            GalleryDetails::Project { .. } => GalleryCategory::Project,
            GalleryDetails::Event { .. } => GalleryCategory::Event,
        }
    }

    fn build_details(
        category: Self::Category,
        draft: &ItemDraft,
    ) -> Result<Self::Details, ItemValidationError> {
        check_required(category, draft)?;

        let image_url = draft.value_of("image_url").unwrap_or_default();
        if !is_http_url(&image_url) {
            return Err(ItemValidationError::InvalidUrl { field: "image_url" });
        }

        Ok(match category {
            GalleryCategory::Profile => GalleryDetails::Profile { image_url },
            GalleryCategory::Project => GalleryDetails::Project {
                image_url,
                // Legacy payloads put the related project name in `project`
                project_title: draft
                    .value_of("project_title")
                    .or_else(|| draft.value_of("project")),
            },
            GalleryCategory::Event => GalleryDetails::Event {
                image_url,
                event_name: draft
                    .value_of("event_name")
                    .or_else(|| draft.value_of("event")),
            },
        })
    }
}

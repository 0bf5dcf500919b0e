use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::catalog::domain::category::Category;

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ItemValidationError {
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Field `{field}` must be a valid http(s) URL")]
    InvalidUrl { field: &'static str },

    #[error("Invalid value for field `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// Gate shared by every family: all of the category's required fields must
/// be present and non-empty before any details are built. Reports the first
/// missing field by name.
pub fn check_required<C: Category>(
    category: C,
    draft: &ItemDraft,
) -> Result<(), ItemValidationError> {
    for &field in category.required_fields() {
        if !draft.has_field(field) {
            return Err(ItemValidationError::MissingField(field));
        }
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Draft (untyped incoming item fields)
// ──────────────────────────────────────────────────────────
//

/// The loose field set a client submits for an item, before category
/// validation turns it into typed details.
///
/// `title`/`project`/`organization`/`event` exist because legacy payloads
/// never agreed on a single display-name field; `display_name` resolves
/// them, first non-empty wins. New clients should send `name`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub title: Option<String>,
    pub project: Option<String>,
    pub organization: Option<String>,
    pub event: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl ItemDraft {
    pub fn display_name(&self) -> Option<String> {
        non_empty(&self.name)
            .or_else(|| non_empty(&self.title))
            .or_else(|| non_empty(&self.project))
            .or_else(|| non_empty(&self.organization))
            .or_else(|| non_empty(&self.event))
    }

    pub fn description(&self) -> Option<String> {
        non_empty(&self.description)
    }

    /// Named field lookup, covering both the declared fields and the
    /// flattened extras.
    pub fn value_of(&self, field: &str) -> Option<String> {
        match field {
            "name" => self.display_name(),
            "title" => non_empty(&self.title),
            "project" => non_empty(&self.project),
            "organization" => non_empty(&self.organization),
            "event" => non_empty(&self.event),
            "description" => self.description(),
            _ => self.extra.get(field).and_then(|v| match v {
                serde_json::Value::String(s) => {
                    let trimmed = s.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                }
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        match field {
            "date" => self.date.is_some(),
            other => self.value_of(other).is_some(),
        }
    }

    /// Counters like `stars` arrive either as a number or as a numeric
    /// string, depending on the client generation.
    pub fn count_of(&self, field: &'static str) -> Result<Option<u32>, ItemValidationError> {
        let Some(value) = self.extra.get(field) else {
            return Ok(None);
        };

        let parsed = match value {
            serde_json::Value::Null => return Ok(None),
            serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            serde_json::Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<u32>().ok()
            }
            _ => None,
        };

        parsed
            .map(Some)
            .ok_or_else(|| ItemValidationError::InvalidValue {
                field,
                reason: "expected a non-negative number".to_string(),
            })
    }
}

//
// ──────────────────────────────────────────────────────────
// Family + item
// ──────────────────────────────────────────────────────────
//

/// One nested-category item family (achievements, extracurriculars,
/// gallery, videos). Ties a closed category set to the typed details each
/// category carries.
pub trait CatalogFamily: Copy + Clone + fmt::Debug + Send + Sync + 'static {
    /// Storage discriminator; matches `Category::FAMILY`.
    const NAME: &'static str;

    type Category: Category;
    type Details: Clone
        + fmt::Debug
        + PartialEq
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    /// Total over the details enum; an item can never disagree with its
    /// category.
    fn category_of(details: &Self::Details) -> Self::Category;

    /// Validates the draft against the category's required fields and
    /// builds the typed details. Never partially succeeds.
    fn build_details(
        category: Self::Category,
        draft: &ItemDraft,
    ) -> Result<Self::Details, ItemValidationError>;
}

#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct CatalogItem<F: CatalogFamily> {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub details: F::Details,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<F: CatalogFamily> CatalogItem<F> {
    pub fn category(&self) -> F::Category {
        F::category_of(&self.details)
    }

    /// Seeds an editor draft from a persisted item, details fields
    /// flattened back into extras.
    pub fn to_draft(&self) -> ItemDraft {
        let mut extra = match serde_json::to_value(&self.details) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        };
        // The tag is carried separately by the editor
        extra.remove("category");

        ItemDraft {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            date: self.date,
            extra,
            ..Default::default()
        }
    }
}

/// The redesigned "whole parent" read: every sub-collection of a family,
/// keyed by its collection name, empty ones included.
pub struct GroupedItems<F: CatalogFamily> {
    groups: Vec<(F::Category, Vec<CatalogItem<F>>)>,
}

impl<F: CatalogFamily> GroupedItems<F> {
    pub fn new(items: Vec<CatalogItem<F>>) -> Self {
        let mut groups: Vec<(F::Category, Vec<CatalogItem<F>>)> = F::Category::all()
            .iter()
            .map(|c| (*c, Vec::new()))
            .collect();

        for item in items {
            let category = item.category();
            if let Some((_, bucket)) = groups.iter_mut().find(|(c, _)| *c == category) {
                bucket.push(item);
            }
        }

        Self { groups }
    }

    pub fn get(&self, category: F::Category) -> &[CatalogItem<F>] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }
}

impl<F: CatalogFamily> Serialize for GroupedItems<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (category, items) in &self.groups {
            map.serialize_entry(category.collection(), items)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_first_non_empty_wins() {
        let draft = ItemDraft {
            title: Some("  ".to_string()),
            project: Some("my-lib".to_string()),
            organization: Some("Org".to_string()),
            ..Default::default()
        };
        assert_eq!(draft.display_name().as_deref(), Some("my-lib"));
    }

    #[test]
    fn test_display_name_prefers_name() {
        let draft = ItemDraft {
            name: Some("Canonical".to_string()),
            title: Some("Legacy".to_string()),
            ..Default::default()
        };
        assert_eq!(draft.display_name().as_deref(), Some("Canonical"));
    }

    #[test]
    fn test_value_of_reads_extras() {
        let draft: ItemDraft =
            serde_json::from_str(r#"{"title": "X", "issuer": "Conf", "stars": 10}"#).unwrap();
        assert_eq!(draft.value_of("issuer").as_deref(), Some("Conf"));
        assert_eq!(draft.value_of("stars").as_deref(), Some("10"));
        assert!(draft.value_of("missing").is_none());
    }

    #[test]
    fn test_count_of_accepts_string_and_number() {
        let draft: ItemDraft =
            serde_json::from_str(r#"{"stars": "10", "contributors": 2}"#).unwrap();
        assert_eq!(draft.count_of("stars").unwrap(), Some(10));
        assert_eq!(draft.count_of("contributors").unwrap(), Some(2));
        assert_eq!(draft.count_of("absent").unwrap(), None);
    }

    #[test]
    fn test_count_of_rejects_garbage() {
        let draft: ItemDraft = serde_json::from_str(r#"{"stars": "many"}"#).unwrap();
        assert!(matches!(
            draft.count_of("stars"),
            Err(ItemValidationError::InvalidValue { field: "stars", .. })
        ));
    }
}

use uuid::Uuid;

use crate::modules::catalog::domain::category::Category;
use crate::modules::catalog::domain::item::{
    CatalogFamily, CatalogItem, ItemDraft, ItemValidationError,
};

//
// ──────────────────────────────────────────────────────────
// States
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode<C: Category> {
    Create,
    Edit {
        item_id: Uuid,
        /// Category the item had when the dialog opened; a category change
        /// during the edit turns the save into a move.
        original_category: C,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    /// `submit` called without an open dialog.
    NotOpen,
    Validation(ItemValidationError),
    /// A save that validated locally but failed to persist. The dialog
    /// stays open and the draft is kept; nothing was written locally.
    Persistence(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorState<C: Category> {
    Idle,
    Open {
        mode: EditorMode<C>,
        category: C,
        draft: ItemDraft,
        error: Option<EditorError>,
    },
}

/// What a validated submit asks the persistence layer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum SavePlan<C: Category> {
    /// New item appended to the category's sub-collection; ordering is
    /// insertion order, not date order.
    Append { category: C },
    /// In-place overwrite, position within the sub-collection preserved.
    Replace { item_id: Uuid, category: C },
    /// Category changed: remove from `from`, add to `to`.
    Move { item_id: Uuid, from: C, to: C },
}

//
// ──────────────────────────────────────────────────────────
// Editor
// ──────────────────────────────────────────────────────────
//

/// The admin item dialog as a state machine:
/// `Idle → Open → (submit) → Open until confirmed → Idle`.
///
/// `submit` only validates and plans; the caller performs the persistence
/// call and reports back via `save_confirmed` / `save_failed`. Local state
/// therefore never runs ahead of the store.
#[derive(Debug)]
pub struct ItemEditor<F: CatalogFamily> {
    state: EditorState<F::Category>,
}

impl<F: CatalogFamily> Default for ItemEditor<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: CatalogFamily> ItemEditor<F> {
    pub fn new() -> Self {
        Self {
            state: EditorState::Idle,
        }
    }

    pub fn state(&self) -> &EditorState<F::Category> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open { .. })
    }

    /// Open the dialog with a blank draft pre-tagged with a default
    /// category.
    pub fn open_create(&mut self, default_category: F::Category) {
        self.state = EditorState::Open {
            mode: EditorMode::Create,
            category: default_category,
            draft: ItemDraft::default(),
            error: None,
        };
    }

    /// Open the dialog seeded with an existing item's full field set and
    /// its original category.
    pub fn open_edit(&mut self, item: &CatalogItem<F>) {
        let category = item.category();
        self.state = EditorState::Open {
            mode: EditorMode::Edit {
                item_id: item.id,
                original_category: category,
            },
            category,
            draft: item.to_draft(),
            error: None,
        };
    }

    pub fn set_category(&mut self, category: F::Category) {
        if let EditorState::Open {
            category: current, ..
        } = &mut self.state
        {
            *current = category;
        }
    }

    pub fn update_draft(&mut self, update: impl FnOnce(&mut ItemDraft)) {
        if let EditorState::Open { draft, .. } = &mut self.state {
            update(draft);
        }
    }

    /// Validate the draft and produce a save plan. On validation failure
    /// the dialog stays open with the offending field recorded; nothing is
    /// partially saved. On success the dialog stays open until the caller
    /// confirms persistence.
    pub fn submit(&mut self) -> Result<(SavePlan<F::Category>, F::Details), EditorError> {
        let EditorState::Open {
            mode,
            category,
            draft,
            error,
        } = &mut self.state
        else {
            return Err(EditorError::NotOpen);
        };

        match F::build_details(*category, draft) {
            Ok(details) => {
                *error = None;
                let plan = match mode {
                    EditorMode::Create => SavePlan::Append {
                        category: *category,
                    },
                    EditorMode::Edit {
                        item_id,
                        original_category,
                    } => {
                        if original_category == category {
                            SavePlan::Replace {
                                item_id: *item_id,
                                category: *category,
                            }
                        } else {
                            SavePlan::Move {
                                item_id: *item_id,
                                from: *original_category,
                                to: *category,
                            }
                        }
                    }
                };
                Ok((plan, details))
            }
            Err(validation) => {
                *error = Some(EditorError::Validation(validation.clone()));
                Err(EditorError::Validation(validation))
            }
        }
    }

    /// The persistence call succeeded; dialog closes.
    pub fn save_confirmed(&mut self) {
        self.state = EditorState::Idle;
    }

    /// The persistence call failed after a valid submit. Keep the dialog
    /// open with the in-progress edits and surface the error.
    pub fn save_failed(&mut self, message: impl Into<String>) {
        if let EditorState::Open { error, .. } = &mut self.state {
            *error = Some(EditorError::Persistence(message.into()));
        }
    }

    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    pub fn last_error(&self) -> Option<&EditorError> {
        match &self.state {
            EditorState::Open { error, .. } => error.as_ref(),
            EditorState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::UserId;
    use crate::modules::catalog::domain::achievements::{
        AchievementCategory, AchievementDetails, Achievements,
    };
    use chrono::Utc;

    fn award_item() -> CatalogItem<Achievements> {
        CatalogItem {
            id: Uuid::new_v4(),
            owner: UserId::from(Uuid::new_v4()),
            name: "Best Demo".to_string(),
            description: Some("x".to_string()),
            date: None,
            details: AchievementDetails::Award {
                issuer: Some("Conf".to_string()),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn fill_award(draft: &mut ItemDraft) {
        draft.title = Some("Best Demo".to_string());
        draft.description = Some("x".to_string());
    }

    #[test]
    fn test_starts_idle() {
        let editor: ItemEditor<Achievements> = ItemEditor::new();
        assert_eq!(*editor.state(), EditorState::Idle);
    }

    #[test]
    fn test_open_create_seeds_blank_draft_with_default_category() {
        let mut editor: ItemEditor<Achievements> = ItemEditor::new();
        editor.open_create(AchievementCategory::Award);

        match editor.state() {
            EditorState::Open {
                mode,
                category,
                draft,
                error,
            } => {
                assert_eq!(*mode, EditorMode::Create);
                assert_eq!(*category, AchievementCategory::Award);
                assert_eq!(*draft, ItemDraft::default());
                assert!(error.is_none());
            }
            EditorState::Idle => panic!("editor should be open"),
        }
    }

    #[test]
    fn test_open_edit_seeds_fields_and_original_category() {
        let item = award_item();
        let mut editor: ItemEditor<Achievements> = ItemEditor::new();
        editor.open_edit(&item);

        match editor.state() {
            EditorState::Open {
                mode,
                category,
                draft,
                ..
            } => {
                assert_eq!(
                    *mode,
                    EditorMode::Edit {
                        item_id: item.id,
                        original_category: AchievementCategory::Award,
                    }
                );
                assert_eq!(*category, AchievementCategory::Award);
                assert_eq!(draft.name.as_deref(), Some("Best Demo"));
                assert_eq!(draft.value_of("issuer").as_deref(), Some("Conf"));
            }
            EditorState::Idle => panic!("editor should be open"),
        }
    }

    #[test]
    fn test_validation_failure_keeps_dialog_open_and_names_field() {
        let mut editor: ItemEditor<Achievements> = ItemEditor::new();
        editor.open_create(AchievementCategory::Award);
        editor.update_draft(|d| d.title = Some("Best Demo".to_string()));

        let err = editor.submit().unwrap_err();
        assert_eq!(
            err,
            EditorError::Validation(ItemValidationError::MissingField("description"))
        );
        assert!(editor.is_open());
        assert_eq!(
            editor.last_error(),
            Some(&EditorError::Validation(ItemValidationError::MissingField(
                "description"
            )))
        );
    }

    #[test]
    fn test_create_submit_plans_append() {
        let mut editor: ItemEditor<Achievements> = ItemEditor::new();
        editor.open_create(AchievementCategory::Award);
        editor.update_draft(fill_award);

        let (plan, details) = editor.submit().unwrap();
        assert_eq!(
            plan,
            SavePlan::Append {
                category: AchievementCategory::Award
            }
        );
        assert!(matches!(details, AchievementDetails::Award { .. }));

        // Still open until the store confirms
        assert!(editor.is_open());
        editor.save_confirmed();
        assert_eq!(*editor.state(), EditorState::Idle);
    }

    #[test]
    fn test_edit_without_category_change_plans_replace() {
        let item = award_item();
        let mut editor: ItemEditor<Achievements> = ItemEditor::new();
        editor.open_edit(&item);

        let (plan, _) = editor.submit().unwrap();
        assert_eq!(
            plan,
            SavePlan::Replace {
                item_id: item.id,
                category: AchievementCategory::Award,
            }
        );
    }

    #[test]
    fn test_category_change_plans_move() {
        let item = award_item();
        let mut editor: ItemEditor<Achievements> = ItemEditor::new();
        editor.open_edit(&item);
        editor.set_category(AchievementCategory::Certification);
        editor.update_draft(|d| {
            d.extra.insert(
                "issuer".to_string(),
                serde_json::Value::String("Examiner".to_string()),
            );
        });

        let (plan, details) = editor.submit().unwrap();
        assert_eq!(
            plan,
            SavePlan::Move {
                item_id: item.id,
                from: AchievementCategory::Award,
                to: AchievementCategory::Certification,
            }
        );
        assert!(matches!(details, AchievementDetails::Certification { .. }));
    }

    #[test]
    fn test_save_failure_keeps_draft_and_surfaces_error() {
        let mut editor: ItemEditor<Achievements> = ItemEditor::new();
        editor.open_create(AchievementCategory::Award);
        editor.update_draft(fill_award);

        editor.submit().unwrap();
        editor.save_failed("connection reset");

        assert!(editor.is_open());
        assert_eq!(
            editor.last_error(),
            Some(&EditorError::Persistence("connection reset".to_string()))
        );
        match editor.state() {
            EditorState::Open { draft, .. } => {
                assert_eq!(draft.title.as_deref(), Some("Best Demo"));
            }
            EditorState::Idle => panic!("dialog must stay open after a failed save"),
        }

        // Retry after the failure succeeds
        let (plan, _) = editor.submit().unwrap();
        assert_eq!(
            plan,
            SavePlan::Append {
                category: AchievementCategory::Award
            }
        );
        editor.save_confirmed();
        assert!(!editor.is_open());
    }

    #[test]
    fn test_submit_without_open_dialog() {
        let mut editor: ItemEditor<Achievements> = ItemEditor::new();
        assert_eq!(editor.submit().unwrap_err(), EditorError::NotOpen);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut editor: ItemEditor<Achievements> = ItemEditor::new();
        editor.open_create(AchievementCategory::Milestone);
        editor.update_draft(fill_award);
        editor.cancel();
        assert_eq!(*editor.state(), EditorState::Idle);
    }
}

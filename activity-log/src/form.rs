//! The draft form that gatekeeps what reaches the log.
//!
//! The reducer appends whatever it is given. Validity lives here: a
//! [`Draft`] is edited freely, and [`ActivityForm::submit`] only hands back
//! an [`Activity`] when the draft has a name and a positive calorie count.
//! Every edit replaces the draft with a new value, and every successful
//! submit starts over with a fresh identity.

use crate::types::{Activity, ActivityId, Category};
use shelf_core::environment::IdGenerator;
use std::sync::Arc;

/// A candidate activity that has not been logged yet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    /// Identity the activity will carry once logged
    pub id: ActivityId,
    /// Food or exercise
    pub category: Category,
    /// What was eaten or done
    pub name: String,
    /// Calories consumed or burned
    pub calories: i32,
}

impl Draft {
    /// A blank draft: food, no name, zero calories
    #[must_use]
    pub fn new(id: ActivityId) -> Self {
        Self {
            id,
            category: Category::default(),
            name: String::new(),
            calories: 0,
        }
    }

    /// Same draft with another category
    #[must_use]
    pub fn with_category(self, category: Category) -> Self {
        Self { category, ..self }
    }

    /// Same draft with another name
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Same draft with another calorie count
    #[must_use]
    pub fn with_calories(self, calories: i32) -> Self {
        Self { calories, ..self }
    }

    /// `true` iff the name is not blank and calories are positive
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.calories > 0
    }

    /// Commits the draft as-is
    #[must_use]
    pub fn into_activity(self) -> Activity {
        Activity {
            id: self.id,
            category: self.category,
            name: self.name,
            calories: self.calories,
        }
    }
}

/// One field edit coming from the presentation layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldChange {
    /// Category chosen by numeric id
    Category(u8),
    /// New name text
    Name(String),
    /// New calorie count
    Calories(i32),
}

/// Holds the draft being edited and the id source for new drafts
pub struct ActivityForm {
    draft: Draft,
    ids: Arc<dyn IdGenerator>,
}

impl ActivityForm {
    /// Starts with a blank draft carrying a fresh id
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        let draft = Draft::new(ActivityId::from_uuid(ids.next_id()));
        Self { draft, ids }
    }

    /// The draft as it currently stands
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether [`submit`](Self::submit) would succeed right now
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    /// Applies one field edit
    ///
    /// A category id that names no category leaves the draft unchanged.
    pub fn change(&mut self, change: FieldChange) {
        let draft = self.draft.clone();
        self.draft = match change {
            FieldChange::Category(id) => match Category::from_id(id) {
                Some(category) => draft.with_category(category),
                None => {
                    tracing::debug!(category_id = id, "Ignoring unknown category");
                    draft
                }
            },
            FieldChange::Name(name) => draft.with_name(name),
            FieldChange::Calories(calories) => draft.with_calories(calories),
        };
    }

    /// Commits a valid draft and starts a fresh one
    ///
    /// Returns `None`, keeping the draft for further editing, when it is not
    /// valid. The caller dispatches the returned activity to the log.
    pub fn submit(&mut self) -> Option<Activity> {
        if !self.draft.is_valid() {
            tracing::debug!(draft_id = %self.draft.id, "Submit suppressed for invalid draft");
            return None;
        }

        let fresh = Draft::new(ActivityId::from_uuid(self.ids.next_id()));
        let committed = std::mem::replace(&mut self.draft, fresh);
        tracing::debug!(activity_id = %committed.id, "Draft committed");
        Some(committed.into_activity())
    }
}

impl std::fmt::Debug for ActivityForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityForm")
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

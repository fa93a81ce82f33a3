//! Domain types for the activity log.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use shelf_core::snapshot::Snapshot;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for an activity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(Uuid);

impl ActivityId {
    /// Wraps an existing identity
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A category id that names no category
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown category id {0}")]
pub struct UnknownCategory(pub u8);

/// What kind of entry an activity is
///
/// Serialized as its numeric id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    /// Calories consumed
    #[default]
    Food,
    /// Calories burned
    Exercise,
}

impl Category {
    /// Every category, in id order
    pub const ALL: [Self; 2] = [Self::Food, Self::Exercise];

    /// Looks up a category by id
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Food),
            2 => Some(Self::Exercise),
            _ => None,
        }
    }

    /// Numeric id
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Food => 1,
            Self::Exercise => 2,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Exercise => "Exercise",
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = UnknownCategory;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(UnknownCategory(id))
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.id()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// A committed log entry
///
/// Activities are only created by submitting a valid draft and are never
/// modified after they are appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier
    pub id: ActivityId,
    /// Food or exercise
    pub category: Category,
    /// What was eaten or done
    pub name: String,
    /// Calories consumed or burned
    pub calories: i32,
}

/// State of the activity log
///
/// Append-only; insertion order is the only ordering. Persisted as a bare
/// JSON array under the `"activities"` key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityState {
    activities: Vec<Activity>,
}

impl ActivityState {
    /// Creates an empty log
    #[must_use]
    pub const fn new() -> Self {
        Self {
            activities: Vec::new(),
        }
    }

    /// Logged activities, oldest first
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Appends `activity` at the end of the log
    pub(crate) fn append(&mut self, activity: Activity) {
        self.activities.push(activity);
    }

    /// Number of logged activities
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// `true` iff nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Returns an activity by id
    #[must_use]
    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    fn calories_in(&self, category: Category) -> i64 {
        self.activities
            .iter()
            .filter(|activity| activity.category == category)
            .map(|activity| i64::from(activity.calories))
            .sum()
    }

    /// Sum of calories over food entries
    #[must_use]
    pub fn calories_consumed(&self) -> i64 {
        self.calories_in(Category::Food)
    }

    /// Sum of calories over exercise entries
    #[must_use]
    pub fn calories_burned(&self) -> i64 {
        self.calories_in(Category::Exercise)
    }

    /// Consumed minus burned
    #[must_use]
    pub fn net_calories(&self) -> i64 {
        self.calories_consumed() - self.calories_burned()
    }
}

impl Snapshot for ActivityState {
    const STORAGE_KEY: &'static str = "activities";
}

/// Wire tag of [`ActivityAction::SaveActivity`]
const SAVE_ACTIVITY: &str = "save-activity";

/// Actions for the activity log
///
/// Wire shape: `{"type": "save-activity", "payload": {"newActivity": {...}}}`.
/// Any other `type` decodes to [`ActivityAction::Unknown`], whatever its
/// `payload` holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum ActivityAction {
    /// Append an activity to the log
    SaveActivity {
        /// The activity to append
        #[serde(rename = "newActivity")]
        new_activity: Activity,
    },

    /// An action this log does not handle
    Unknown,
}

impl<'de> Deserialize<'de> for ActivityAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Tagged {
            #[serde(rename = "type")]
            kind: String,
            #[serde(default)]
            payload: serde_json::Value,
        }

        #[derive(Deserialize)]
        struct SavePayload {
            #[serde(rename = "newActivity")]
            new_activity: Activity,
        }

        let Tagged { kind, payload } = Tagged::deserialize(deserializer)?;

        if kind == SAVE_ACTIVITY {
            let SavePayload { new_activity } =
                serde_json::from_value(payload).map_err(de::Error::custom)?;
            Ok(Self::SaveActivity { new_activity })
        } else {
            Ok(Self::Unknown)
        }
    }
}

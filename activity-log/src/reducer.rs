//! Reducer logic for the activity log.

use crate::types::{ActivityAction, ActivityState};
use shelf_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the activity log
///
/// Appends unconditionally. Whether an activity may be logged is decided
/// before dispatch by [`ActivityForm`](crate::form::ActivityForm).
#[derive(Clone, Debug)]
pub struct ActivityReducer;

impl ActivityReducer {
    /// Creates a new `ActivityReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ActivityReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for ActivityReducer {
    type State = ActivityState;
    type Action = ActivityAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect; 4]> {
        match action {
            ActivityAction::SaveActivity { new_activity } => {
                tracing::info!(
                    activity_id = %new_activity.id,
                    category = %new_activity.category,
                    calories = new_activity.calories,
                    "Activity saved"
                );
                state.append(new_activity);
                smallvec![Effect::Persist]
            }
            ActivityAction::Unknown => {
                tracing::debug!("Ignoring unknown action");
                smallvec![Effect::None]
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::types::{Activity, ActivityId, Category};
    use shelf_testing::{ReducerTest, assertions};
    use uuid::Uuid;

    fn activity(n: u128, name: &str, calories: i32) -> Activity {
        Activity {
            id: ActivityId::from_uuid(Uuid::from_u128(n)),
            category: Category::Food,
            name: name.to_string(),
            calories,
        }
    }

    #[test]
    fn test_save_appends() {
        ReducerTest::new(ActivityReducer::new())
            .with_env(())
            .given_state(ActivityState::new())
            .when_action(ActivityAction::SaveActivity {
                new_activity: activity(1, "Toast", 200),
            })
            .when_action(ActivityAction::SaveActivity {
                new_activity: activity(2, "Soup", 150),
            })
            .then_state(|state| {
                let names: Vec<_> = state.activities().iter().map(|a| a.name.as_str()).collect();
                assert_eq!(names, vec!["Toast", "Soup"]);
            })
            .then_effects(assertions::assert_persists)
            .run();
    }

    #[test]
    fn test_save_does_not_validate() {
        ReducerTest::new(ActivityReducer::new())
            .with_env(())
            .given_state(ActivityState::new())
            .when_action(ActivityAction::SaveActivity {
                new_activity: activity(1, "", 0),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
            })
            .then_effects(assertions::assert_persists)
            .run();
    }

    #[test]
    fn test_unknown_action_leaves_state() {
        let mut existing = ActivityState::new();
        let _ = ActivityReducer::new().reduce(
            &mut existing,
            ActivityAction::SaveActivity {
                new_activity: activity(1, "Toast", 200),
            },
            &(),
        );

        ReducerTest::new(ActivityReducer::new())
            .with_env(())
            .given_state(existing.clone())
            .when_action(ActivityAction::Unknown)
            .then_state(move |state| {
                assert_eq!(state, &existing);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}

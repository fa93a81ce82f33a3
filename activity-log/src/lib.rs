//! Calorie tracker built on shelf.
//!
//! An append-only log of food and exercise entries. New entries are edited as
//! a [`Draft`] inside an [`ActivityForm`], which only releases them once they
//! are valid; the [`ActivityReducer`] then appends them and the log is
//! persisted like any other snapshot state.

pub mod form;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use form::{ActivityForm, Draft, FieldChange};
pub use reducer::ActivityReducer;
pub use types::{Activity, ActivityAction, ActivityId, ActivityState, Category, UnknownCategory};

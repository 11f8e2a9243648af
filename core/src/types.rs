//! Domain DTOs for the foods API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the core never depends on server internals. Integration tests catch any
//! schema drift between the two crates.
//!
//! `price` stays a decimal-as-string: the backend stores and echoes it
//! verbatim, and the dashboard never does arithmetic on it.

use serde::{Deserialize, Serialize};

/// A single menu entry returned by the API.
///
/// `id` is assigned by the backend on create and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

/// The subset of [`Food`] fields the create/edit overlays can submit.
///
/// Excludes `id` (server-assigned) and `available` (not settable through the
/// form; the server defaults it on create and the card toggle changes it).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

/// Payload for `PUT /foods/{id}`. Only the fields present in the JSON are
/// applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl From<&FoodDraft> for FoodPatch {
    /// An edit-form submission: every draft field set, `available` untouched.
    fn from(draft: &FoodDraft) -> Self {
        FoodPatch {
            name: Some(draft.name.clone()),
            image: Some(draft.image.clone()),
            price: Some(draft.price.clone()),
            description: Some(draft.description.clone()),
            available: None,
        }
    }
}

impl From<&Food> for FoodPatch {
    /// A full-item submission, as the availability toggle sends.
    fn from(food: &Food) -> Self {
        FoodPatch {
            name: Some(food.name.clone()),
            image: Some(food.image.clone()),
            price: Some(food.price.clone()),
            description: Some(food.description.clone()),
            available: Some(food.available),
        }
    }
}

impl Food {
    /// Merge a patch into this item: `Some` fields overwrite, `None` fields
    /// stay, `id` is never touched. Update and the availability toggle both
    /// reconcile through this one rule.
    pub fn apply(&self, patch: &FoodPatch) -> Food {
        Food {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            image: patch.image.clone().unwrap_or_else(|| self.image.clone()),
            price: patch.price.clone().unwrap_or_else(|| self.price.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            available: patch.available.unwrap_or(self.available),
        }
    }
}

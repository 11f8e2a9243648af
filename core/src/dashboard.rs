//! Dashboard state controller for the foods admin page.
//!
//! # Design
//! `Dashboard` owns the authoritative in-memory list of foods plus the
//! editing selection, and mediates every mutation between the UI and the
//! [`FoodsApi`] collaborator. It is strictly confirm-then-mutate: no
//! operation touches local state until the server call succeeds, so a failed
//! call can never leave the list inconsistent with what the operator last
//! saw. Failures are written to the `log` sink and otherwise swallowed — the
//! UI is never told an operation failed, it simply sees no change.

use crate::api::FoodsApi;
use crate::types::{Food, FoodDraft, FoodPatch};

/// Owns the food collection, the editing selection, and the two overlay
/// visibility flags.
///
/// The collection is insertion-ordered with the newest-created item first;
/// ids are unique within it. The host drives [`Dashboard::load`] once on
/// activation, then forwards UI intents to the other methods.
#[derive(Debug)]
pub struct Dashboard<A: FoodsApi> {
    api: A,
    foods: Vec<Food>,
    editing: Option<Food>,
    add_modal_open: bool,
    edit_modal_open: bool,
}

impl<A: FoodsApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            foods: Vec::new(),
            editing: None,
            add_modal_open: false,
            edit_modal_open: false,
        }
    }

    /// Current collection, in render order (newest-created first).
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// The item currently targeted by the edit overlay, if any.
    pub fn editing(&self) -> Option<&Food> {
        self.editing.as_ref()
    }

    pub fn is_add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    pub fn is_edit_modal_open(&self) -> bool {
        self.edit_modal_open
    }

    /// Fetch the full list once and replace the collection wholesale,
    /// preserving server order. On failure the collection stays as it was.
    pub fn load(&mut self) {
        match self.api.list() {
            Ok(foods) => self.foods = foods,
            Err(err) => log::warn!("loading foods failed: {err}"),
        }
    }

    /// Create a new food from the add-overlay draft. The server-returned
    /// item (with its assigned id and default availability) becomes the
    /// first element of the collection. No optimistic insert.
    pub fn add_food(&mut self, draft: &FoodDraft) {
        match self.api.create(draft) {
            Ok(food) => self.foods.insert(0, food),
            Err(err) => log::warn!("creating food failed: {err}"),
        }
    }

    /// Target `food` for editing and flip the edit overlay. The selection is
    /// not cleared after a submit; it stays until the next selection
    /// replaces it, so a repeated edit submit reuses the last-selected id.
    pub fn select_for_edit(&mut self, food: Food) {
        self.editing = Some(food);
        self.toggle_edit_modal();
    }

    /// Submit the edit-overlay draft against the current editing selection.
    /// With no selection the submit has no target and is dropped with a
    /// warning. Draft fields overwrite the stored item; `id` and `available`
    /// are preserved, and the item keeps its position in the collection.
    pub fn update_food(&mut self, draft: &FoodDraft) {
        let Some(id) = self.editing.as_ref().map(|f| f.id) else {
            log::warn!("edit submitted with no food selected");
            return;
        };
        let patch = FoodPatch::from(draft);
        match self.api.update(id, &patch) {
            Ok(_) => self.reconcile(id, &patch),
            Err(err) => log::warn!("updating food {id} failed: {err}"),
        }
    }

    /// Persist an availability flip. The presenter passes the full item with
    /// `available` already inverted; the whole item is sent and the same
    /// merge rule as [`Dashboard::update_food`] reconciles it locally.
    pub fn toggle_available(&mut self, food: &Food) {
        let patch = FoodPatch::from(food);
        match self.api.update(food.id, &patch) {
            Ok(_) => self.reconcile(food.id, &patch),
            Err(err) => log::warn!("toggling food {} failed: {err}", food.id),
        }
    }

    /// Delete by id; on success the matching item is removed and every other
    /// item keeps its position.
    pub fn delete_food(&mut self, id: u64) {
        match self.api.delete(id) {
            Ok(()) => self.foods.retain(|food| food.id != id),
            Err(err) => log::warn!("deleting food {id} failed: {err}"),
        }
    }

    pub fn toggle_add_modal(&mut self) {
        self.add_modal_open = !self.add_modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    /// Replace the item matching `id` with the patch merged over it,
    /// in place. Items with other ids are untouched.
    fn reconcile(&mut self, id: u64, patch: &FoodPatch) {
        for food in &mut self.foods {
            if food.id == id {
                *food = food.apply(patch);
            }
        }
    }
}

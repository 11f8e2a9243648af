//! The API-client seam consumed by the dashboard.
//!
//! # Design
//! The dashboard never talks HTTP directly; it mutates through this trait.
//! A production host implements it by executing `FoodsClient` requests over
//! its transport of choice, while tests substitute an in-memory scripted
//! implementation. Transport, base address, headers, and serialization are
//! entirely the implementor's concern.

use crate::error::ApiError;
use crate::types::{Food, FoodDraft, FoodPatch};

/// Remote `foods` resource as seen by the dashboard.
///
/// `create` and `update` must echo back the server's representation of the
/// item; the dashboard reconciles its local collection from those echoes.
pub trait FoodsApi {
    fn list(&self) -> Result<Vec<Food>, ApiError>;
    fn create(&self, draft: &FoodDraft) -> Result<Food, ApiError>;
    fn update(&self, id: u64, patch: &FoodPatch) -> Result<Food, ApiError>;
    fn delete(&self, id: u64) -> Result<(), ApiError>;
}

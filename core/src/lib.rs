//! State-synchronization core for the foods admin dashboard.
//!
//! # Overview
//! Owns the in-memory list of menu items and reconciles it against a remote
//! `foods` REST resource across create, update, delete, and availability
//! toggles. Rendering, overlays, and transport are the host's concern.
//!
//! # Design
//! - `Dashboard` holds the collection, the editing selection, and the
//!   overlay visibility flags; it mutates only after server confirmation
//!   and logs-and-swallows every remote failure.
//! - The remote resource is consumed through the `FoodsApi` trait; hosts
//!   implement it over their transport, tests over an in-memory table.
//! - `FoodsClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern), so request
//!   shapes stay deterministic and testable.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod types;

pub use api::FoodsApi;
pub use client::FoodsClient;
pub use dashboard::Dashboard;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Food, FoodDraft, FoodPatch};

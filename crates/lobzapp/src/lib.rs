//! # Lobz Architecture
//!
//! Lobz keeps a user-edited list of **learning objectives** and renders each one as a
//! sentence:
//!
//! ```text
//! Given a circuit diagram, the student will be able to calculate the total resistance.
//! ```
//!
//! Every objective is composed from a fixed catalog: a learning level, a verb offered
//! by that level, and zero or more accreditation (ABET) outcome codes. This is a
//! UI-agnostic library with a thin CLI client, and the same core could sit behind a
//! web form with drag-and-drop reordering.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Adapter (the `lobz` CLI, or any other front end)        │
//! │  - Draws widgets, reads/writes files, reports user actions  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, parses string positions, returns CmdResult  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (catalog.rs, model.rs, collection.rs, listing.rs)     │
//! │  - Pure data and invariants, no I/O, no logging             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Explicit Catalog Passing
//!
//! The catalog is never global. Rendering and lookups take a [`catalog::CatalogIndex`]
//! argument, so records and collections can be tested without one in scope.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for UI adapters
//! - [`catalog`]: Read-only levels, verbs and outcomes
//! - [`model`]: Objective records, sentence rendering, wire form
//! - [`collection`]: Ordered record list, import/export, reorder reconciliation
//! - [`listing`]: Rendered listings and the outcome summary
//! - [`code`]: Strict parsing of codes and positions
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod code;
pub mod collection;
pub mod config;
pub mod error;
pub mod listing;
pub mod model;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

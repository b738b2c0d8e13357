//! In-memory HR administration core: employee directory, leave-request
//! workflow, company announcements, and job-listing tracking, plus the axum
//! router exposing them.
//!
//! The [`portal`] module is the heart of the crate: an insertion-ordered
//! entity store, the leave-request state machine, pure filter/sort view
//! functions, and dashboard aggregation. [`config`], [`telemetry`], and
//! [`error`] carry the ambient service concerns.

pub mod config;
pub mod error;
pub mod portal;
pub mod telemetry;

//! bubblechart-rs: interactive bubble chart engine for range tutoring.
//!
//! This crate provides a Rust-idiomatic, headless chart engine with frozen
//! scales, keyed scene reconciliation, pointer-drag interaction, and
//! deterministic threshold-hint animations, plus the challenge session
//! layer that owns point collections and grades submissions.

pub mod animation;
pub mod api;
pub mod challenge;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod scene;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};

//! # Stocklens Analytics Engine
//!
//! This crate derives aggregate statistics from a sequence of daily records.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of external systems.
//!   It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless calculator. It takes
//!   a record slice as input and produces a fresh `MetricsSummary` on every call; there is
//!   no incremental update and nothing is cached.
//!
//! ## Public API
//!
//! - `MetricsEngine` / `compute_metrics`: the calculation logic.
//! - `MetricsSummary`: extremes, average volume, overall return and volatility.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{MetricsEngine, compute_metrics};
pub use error::AnalyticsError;
pub use report::MetricsSummary;

//! Placement assessment engine for the language-learning platform.
//!
//! [`assessment`] holds the engine itself; [`config`], [`telemetry`] and
//! [`error`] are the shared service plumbing used by the API binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

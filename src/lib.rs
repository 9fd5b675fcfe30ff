//! Workout planning: pick exercises, whole or halved, to burn the most
//! calories in a bounded amount of time.
//!
//! Two strategies share the [`optimizer::WorkoutStrategy`] trait:
//! - [`optimizer::GreedySolver`]: best calories per minute first, one trailing half
//! - [`optimizer::ExactSolver`]: dynamic programming over half-minute units

pub mod config;
pub mod domain;
pub mod optimizer;
pub mod report;
pub mod telemetry;

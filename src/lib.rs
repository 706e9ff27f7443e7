#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Performance indicators for scoring optimization trials on a benchmarking
//! platform. Each call receives the trial to score plus the full history of
//! scored trials and returns one number: the best feasible objective so far
//! for single-objective problems, or the exact hypervolume of the feasible
//! Pareto front for multi-objective problems.
//!
//! # Getting Started
//!
//! ```
//! use trial_indicators::prelude::*;
//!
//! let indicator = HypervolumeIndicator::new()
//!     .with_reference_point(vec![2.0, 4.0])
//!     .unwrap();
//!
//! let history = vec![Trial::new(vec![2.0, 0.0]), Trial::new(vec![0.0, 2.0])];
//! let hv = indicator.score(&Trial::new(vec![1.0, 1.0]), &history).unwrap();
//! assert!((hv - 5.0).abs() < 1e-12);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Trial`] | Objective, constraint and (possibly unknown) feasibility of one evaluation. |
//! | [`Feasibility`] | Supplied feasibility: feasible, infeasible, or derive from the constraint. |
//! | [`BestIndicator`] | Monotone best-so-far score over a single objective. |
//! | [`HypervolumeIndicator`] | Hypervolume of the feasible Pareto front against a reference point. |
//! | [`Indicator`] | Either of the above; decodes JSON input and emits a [`ScoreRecord`]. |
//!
//! The building blocks are public too: [`feasibility::classify`],
//! [`pareto::pareto_front`] and [`hypervolume::hypervolume`].
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) while scoring | off |
//! | `cli` | The `indicator` binary (stdin → score → stdout), enables `tracing` | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod best;
mod error;
pub mod feasibility;
pub mod hypervolume;
mod indicator;
mod objective;
mod output;
pub mod pareto;
mod trial;
mod types;
pub mod validation;

pub use best::BestIndicator;
pub use error::{Error, ErrorKind, Result};
pub use indicator::{HypervolumeIndicator, Indicator};
pub use objective::{Constraint, Objective};
pub use output::ScoreRecord;
pub use trial::{ClassifiedTrial, ScoredTrial, Trial};
pub use types::{Feasibility, IndicatorKind};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use trial_indicators::prelude::*;
/// ```
pub mod prelude {
    pub use crate::best::{BestIndicator, DEFAULT_WORST_VALUE};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::hypervolume::{derive_reference_point, hypervolume};
    pub use crate::indicator::{HypervolumeIndicator, Indicator};
    pub use crate::objective::{Constraint, Objective};
    pub use crate::output::ScoreRecord;
    pub use crate::pareto::{dominates, non_dominated_sort, pareto_front, pareto_front_indices};
    pub use crate::trial::{ClassifiedTrial, ScoredTrial, Trial};
    pub use crate::types::{Feasibility, IndicatorKind};
}

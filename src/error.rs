/// Errors that can occur while scoring a trial.
///
/// Every variant belongs to one of three families, reported by
/// [`Error::kind`]: malformed input ([`ErrorKind::Validation`]),
/// well-formed but contradictory input ([`ErrorKind::Semantic`]), and
/// numeric failure inside the hypervolume computation
/// ([`ErrorKind::Computation`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when an input document is not valid JSON or does not match
    /// the expected record shape.
    #[error("invalid {what}: {source}")]
    Decode {
        /// Which input failed to decode (e.g. "candidate trial").
        what: &'static str,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// Returned when an objective vector has fewer components than the
    /// indicator requires.
    #[error("objective must have at least {min} components, got {got}")]
    TooFewObjectives {
        /// The minimum number of components.
        min: usize,
        /// The actual number of components.
        got: usize,
    },

    /// Returned when a constraint vector is empty.
    #[error("constraint vector must not be empty")]
    EmptyConstraint,

    /// Returned when an objective has the wrong shape for the indicator
    /// (a vector where a scalar is expected, or vice versa).
    #[error("expected a {expected} objective")]
    ObjectiveShape {
        /// The expected shape ("scalar" or "vector").
        expected: &'static str,
    },

    /// Returned when an objective value is NaN.
    #[error("objective contains NaN")]
    NanObjective,

    /// Returned when the reference point contains NaN or has too few components.
    #[error("invalid reference point: {0}")]
    InvalidReferencePoint(&'static str),

    /// Returned when the worst-value sentinel is not finite.
    #[error("worst value must be finite, got {0}")]
    NonFiniteWorstValue(f64),

    /// Returned when two objective vectors, or an objective vector and the
    /// reference point, have different dimensions.
    #[error("dimension mismatch: expected {expected} objectives, got {got}")]
    DimensionMismatch {
        /// The expected number of objectives.
        expected: usize,
        /// The actual number of objectives.
        got: usize,
    },

    /// Returned when a trial is marked (or classified) feasible but carries
    /// no objective value.
    #[error("the trial is feasible, but the objective is null")]
    FeasibleWithoutObjective,

    /// Returned when the hypervolume computation yields an undefined value.
    #[error("hypervolume calculation failed: result is {0}")]
    UndefinedHypervolume(f64),
}

/// The family an [`Error`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input violates the structural or type contract.
    Validation,
    /// The input is well-formed but logically inconsistent.
    Semantic,
    /// The computation could not produce a defined result.
    Computation,
}

impl Error {
    /// Returns the family this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode { .. }
            | Self::TooFewObjectives { .. }
            | Self::EmptyConstraint
            | Self::ObjectiveShape { .. }
            | Self::NanObjective
            | Self::InvalidReferencePoint(_)
            | Self::NonFiniteWorstValue(_)
            | Self::DimensionMismatch { .. } => ErrorKind::Validation,
            Self::FeasibleWithoutObjective => ErrorKind::Semantic,
            Self::UndefinedHypervolume(_) => ErrorKind::Computation,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

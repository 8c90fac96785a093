//! Tri-state condition results.
//!
//! Conditions answer with one of three outcomes instead of a nullable
//! boolean, making "not applicable never disqualifies" a type-level fact.

/// The result of evaluating one condition against one grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MatchOutcome {
    /// The grid satisfies the condition.
    Match,
    /// The grid fails the condition; this disqualifies the whole group.
    NoMatch,
    /// The condition does not apply to this grid (for example, a numeric
    /// parameter that did not parse). Never disqualifies a group.
    Indeterminate,
}

impl MatchOutcome {
    /// Converts a definite boolean answer into an outcome.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Match } else { Self::NoMatch }
    }

    /// Returns the inverted outcome.
    ///
    /// `Match` and `NoMatch` swap; `Indeterminate` stays indeterminate,
    /// because "not applicable" has no meaningful negation.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Match => Self::NoMatch,
            Self::NoMatch => Self::Match,
            Self::Indeterminate => Self::Indeterminate,
        }
    }

    /// Returns true only for [`MatchOutcome::NoMatch`].
    ///
    /// This is the single outcome that removes a group from the result set.
    #[must_use]
    pub const fn disqualifies(self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

impl From<bool> for MatchOutcome {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

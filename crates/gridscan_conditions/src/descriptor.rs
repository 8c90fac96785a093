//! Condition descriptors.
//!
//! A descriptor pairs a command name (and optional inverse name and help
//! text) with the function that evaluates the condition against one grid.

use std::fmt;
use std::sync::Arc;

use gridscan_foundation::MatchOutcome;
use gridscan_world::GridSnapshot;

/// Evaluation function shared by all conditions.
///
/// Zero-parameter conditions simply ignore the parameter string.
pub type ConditionEval = Arc<dyn Fn(&GridSnapshot, &str) -> MatchOutcome + Send + Sync>;

/// A registry entry: a named, optionally-invertible per-grid test.
#[derive(Clone)]
pub struct ConditionDescriptor {
    /// Primary command name the compiler resolves.
    pub command: String,
    /// Optional inverse command name; matching it negates the result.
    pub invert_command: Option<String>,
    /// Optional help text for operator-facing listings.
    pub help: Option<String>,
    eval: ConditionEval,
}

impl ConditionDescriptor {
    /// Creates a parameterized condition.
    pub fn new(
        command: impl Into<String>,
        eval: impl Fn(&GridSnapshot, &str) -> MatchOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            command: command.into(),
            invert_command: None,
            help: None,
            eval: Arc::new(eval),
        }
    }

    /// Creates a zero-parameter condition.
    pub fn unary(
        command: impl Into<String>,
        eval: impl Fn(&GridSnapshot) -> MatchOutcome + Send + Sync + 'static,
    ) -> Self {
        Self::new(command, move |grid, _| eval(grid))
    }

    /// Sets the inverse command name.
    #[must_use]
    pub fn with_invert(mut self, invert_command: impl Into<String>) -> Self {
        self.invert_command = Some(invert_command.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Evaluates the condition, applying inversion when requested.
    ///
    /// Inversion swaps `Match` and `NoMatch` and leaves `Indeterminate`
    /// untouched.
    #[must_use]
    pub fn evaluate(&self, grid: &GridSnapshot, parameter: &str, inverted: bool) -> MatchOutcome {
        let outcome = (self.eval)(grid, parameter);
        if inverted { outcome.invert() } else { outcome }
    }

    /// Resolves `name` against this descriptor's command names,
    /// case-insensitively.
    ///
    /// Returns `Some(false)` for the primary name, `Some(true)` for the
    /// inverse name, and `None` for anything else.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<bool> {
        if name.eq_ignore_ascii_case(&self.command) {
            return Some(false);
        }
        if let Some(invert) = &self.invert_command {
            if name.eq_ignore_ascii_case(invert) {
                return Some(true);
            }
        }
        None
    }
}

impl fmt::Debug for ConditionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionDescriptor")
            .field("command", &self.command)
            .field("invert_command", &self.invert_command)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

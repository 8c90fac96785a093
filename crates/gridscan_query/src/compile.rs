//! Query compilation.
//!
//! Turns an ordered token list into bound conditions. The only grammar is
//! `command [parameter] command [parameter] ...`; the compiler decides
//! whether the token after a command is its parameter or the next command
//! by asking the registry (a parameter may never spell a command name).

use gridscan_conditions::stdlib::OCCUPANCY_COMMAND;
use gridscan_conditions::{ConditionDescriptor, ConditionRegistry};
use gridscan_foundation::{Error, MatchOutcome, Result};
use gridscan_world::GridSnapshot;

// =============================================================================
// Compiled Query Types
// =============================================================================

/// A descriptor bound to a parameter and an inversion flag.
///
/// Created per query and discarded after evaluation.
#[derive(Clone, Debug)]
pub struct CompiledCondition {
    descriptor: ConditionDescriptor,
    parameter: String,
    inverted: bool,
}

impl CompiledCondition {
    /// Evaluates the bound condition against one grid.
    #[must_use]
    pub fn evaluate(&self, grid: &GridSnapshot) -> MatchOutcome {
        self.descriptor.evaluate(grid, &self.parameter, self.inverted)
    }

    /// Primary command name of the underlying descriptor.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.descriptor.command
    }

    /// The bound parameter; empty for zero-parameter bindings.
    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// True when the token matched the descriptor's inverse name.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

/// The compiled form of one operator query: an ordered AND of conditions.
#[derive(Clone, Debug, Default)]
pub struct MatchQuery {
    conditions: Vec<CompiledCondition>,
}

impl MatchQuery {
    /// Conditions in compiled order.
    #[must_use]
    pub fn conditions(&self) -> &[CompiledCondition] {
        &self.conditions
    }

    /// Number of bound conditions, implicit default included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// True when no condition is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

// =============================================================================
// Query Compiler
// =============================================================================

/// Compiles token lists into executable queries.
pub struct QueryCompiler;

impl QueryCompiler {
    /// Compiles an ordered token list against a registry.
    ///
    /// Unless the query itself mentions the occupancy condition, an
    /// inverted occupancy condition is appended so unoccupied groups are
    /// selected by default. An empty token list therefore compiles to that
    /// implicit default alone.
    ///
    /// # Errors
    ///
    /// Returns [`gridscan_foundation::ErrorKind::UnknownToken`] naming the
    /// first token that resolves to no registered command. The partial
    /// query is discarded; callers must report the failure and produce
    /// zero results.
    pub fn compile(tokens: &[String], registry: &ConditionRegistry) -> Result<MatchQuery> {
        let mut conditions = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];

            // The next token is this command's parameter unless it names a
            // command itself, in which case the current command takes none.
            let parameter = match tokens.get(i + 1) {
                Some(next) if registry.is_command(next) => {
                    i += 1;
                    String::new()
                }
                Some(next) => {
                    i += 2;
                    next.clone()
                }
                None => {
                    i += 1;
                    String::new()
                }
            };

            let Some((descriptor, inverted)) = registry.lookup(token) else {
                return Err(Error::unknown_token(token));
            };

            conditions.push(CompiledCondition {
                descriptor: descriptor.clone(),
                parameter,
                inverted,
            });
        }

        if !conditions
            .iter()
            .any(|c| c.command().eq_ignore_ascii_case(OCCUPANCY_COMMAND))
        {
            // Default scan targets grids without pilots. Synthetic
            // registries without an occupancy condition simply skip this.
            if let Some(descriptor) = registry.get(OCCUPANCY_COMMAND) {
                conditions.push(CompiledCondition {
                    descriptor: descriptor.clone(),
                    parameter: String::new(),
                    inverted: true,
                });
            }
        }

        Ok(MatchQuery { conditions })
    }
}

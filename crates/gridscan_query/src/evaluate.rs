//! Query evaluation.
//!
//! A group is the unit of selection: it matches only when every member
//! grid passes every compiled condition, and one definite failure rejects
//! the whole group immediately. `Indeterminate` outcomes never reject.

use gridscan_foundation::MatchOutcome;
use gridscan_world::{GridGroup, GroupMap, WorldSnapshot};

use crate::compile::MatchQuery;

/// Applies compiled queries to grouped snapshots.
pub struct QueryEvaluator;

impl QueryEvaluator {
    /// Returns the groups whose every member passes every condition, in
    /// group discovery order.
    ///
    /// Conditions are applied to each member in compiled order, and
    /// evaluation of a group stops at the first `NoMatch`. Members the
    /// snapshot no longer knows are treated as not found and skipped.
    #[must_use]
    pub fn evaluate(query: &MatchQuery, world: &WorldSnapshot, groups: &GroupMap) -> Vec<GridGroup> {
        groups
            .groups()
            .iter()
            .filter(|group| Self::group_matches(query, world, group))
            .cloned()
            .collect()
    }

    /// Count of matching groups without cloning them.
    #[must_use]
    pub fn count(query: &MatchQuery, world: &WorldSnapshot, groups: &GroupMap) -> usize {
        groups
            .groups()
            .iter()
            .filter(|group| Self::group_matches(query, world, group))
            .count()
    }

    fn group_matches(query: &MatchQuery, world: &WorldSnapshot, group: &GridGroup) -> bool {
        for &member in &group.members {
            let Some(grid) = world.grid(member) else {
                continue;
            };
            for condition in query.conditions() {
                if condition.evaluate(grid) == MatchOutcome::NoMatch {
                    return false;
                }
            }
        }
        true
    }
}

//! Scan and targeting entry points.
//!
//! These functions are what the external command layer invokes once it has
//! tokenized operator input and decided which handler applies. Each call
//! builds its own group map from the snapshot it is given; nothing is
//! cached across calls.

use glam::DVec3;
use gridscan_conditions::ConditionRegistry;
use gridscan_foundation::{Error, Result};
use gridscan_query::{QueryCompiler, QueryEvaluator};
use gridscan_world::{DEFAULT_LOOK_RANGE, GridGroup, GroupMap, WorldSnapshot, resolve_look_at};

use crate::sink::ResponseSink;

/// The invoking actor's viewpoint for look-at targeting.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewpoint {
    /// Head position in world space.
    pub position: DVec3,
    /// Facing direction; need not be normalized.
    pub forward: DVec3,
}

/// Compiles and evaluates a token query over the snapshot, reporting
/// through `sink`.
///
/// On an unknown token the literal offending token is reported and no
/// groups are returned. On success the match count is reported; zero
/// matches is a count, not an error.
pub fn scan(
    world: &WorldSnapshot,
    registry: &ConditionRegistry,
    tokens: &[String],
    sink: &mut dyn ResponseSink,
) -> Vec<GridGroup> {
    let query = match QueryCompiler::compile(tokens, registry) {
        Ok(query) => query,
        Err(err) => {
            sink.respond(&err.to_string());
            return Vec::new();
        }
    };

    let groups = GroupMap::build(world);
    let matches = QueryEvaluator::evaluate(&query, world, &groups);
    tracing::debug!(
        tokens = tokens.len(),
        groups = groups.len(),
        matches = matches.len(),
        "scan complete"
    );
    sink.respond(&format!("Found {} matching groups", matches.len()));
    matches
}

/// Resolves exactly one group whose any member's display name equals
/// `selector` (case-insensitive) or whose id renders to it.
///
/// # Errors
///
/// Returns [`gridscan_foundation::ErrorKind::AmbiguousTarget`] with the
/// candidate count when zero or several groups qualify.
pub fn find_group_by_name_or_id(
    world: &WorldSnapshot,
    groups: &GroupMap,
    selector: &str,
) -> Result<GridGroup> {
    let candidates: Vec<&GridGroup> = groups
        .groups()
        .iter()
        .filter(|group| {
            group.members.iter().any(|&id| {
                world.grid(id).is_some_and(|grid| {
                    grid.name.eq_ignore_ascii_case(selector) || grid.id.to_string() == selector
                })
            })
        })
        .collect();

    match candidates.as_slice() {
        [single] => Ok((*single).clone()),
        _ => Err(Error::ambiguous_target(selector, candidates.len())),
    }
}

/// Resolves the group the actor is aiming at.
///
/// Raycasts along the viewpoint's facing out to the default look range,
/// then expands the hit grid to its group.
///
/// # Errors
///
/// Returns [`gridscan_foundation::ErrorKind::AmbiguousTarget`] with
/// `found = 0` when the ray hits nothing, and
/// [`gridscan_foundation::ErrorKind::StaleReference`] when the hit grid
/// did not survive grouping.
pub fn find_look_at_group(
    world: &WorldSnapshot,
    groups: &GroupMap,
    viewpoint: &Viewpoint,
) -> Result<GridGroup> {
    let Some(hit) = resolve_look_at(
        world,
        viewpoint.position,
        viewpoint.forward,
        DEFAULT_LOOK_RANGE,
    ) else {
        return Err(Error::ambiguous_target("look-at", 0));
    };

    groups
        .group_of(hit)
        .cloned()
        .ok_or_else(|| Error::stale_reference(hit))
}

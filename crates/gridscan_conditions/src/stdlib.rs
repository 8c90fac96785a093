//! The standard condition library.
//!
//! One pure function, [`conditions`], returns every built-in descriptor;
//! the host registers it at startup. Numeric conditions answer
//! `Indeterminate` when their parameter does not parse, since the test is
//! not applicable to anything in that case. Word-enum conditions answer
//! `NoMatch` for unrecognized words.

use gridscan_foundation::MatchOutcome;
use gridscan_world::{GridSnapshot, Ownership, SizeClass};

use crate::descriptor::ConditionDescriptor;

/// Primary command name of the occupancy condition.
///
/// The query compiler appends this condition, inverted, when a query says
/// nothing about occupancy: by default only unoccupied groups are selected.
pub const OCCUPANCY_COMMAND: &str = "haspilot";

/// Returns the standard condition set.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn conditions() -> Vec<ConditionDescriptor> {
    vec![
        ConditionDescriptor::new("name", name_contains)
            .with_help("Finds grids whose name contains the given text (case-insensitive)."),
        ConditionDescriptor::new("blockslessthan", blocks_less_than)
            .with_help("Finds grids with less than the given number of blocks."),
        ConditionDescriptor::new("blocksgreaterthan", blocks_greater_than)
            .with_help("Finds grids with more than the given number of blocks."),
        ConditionDescriptor::new("pculessthan", pcu_less_than)
            .with_help("Finds grids with less than the given number of PCU."),
        ConditionDescriptor::new("pcugreaterthan", pcu_greater_than)
            .with_help("Finds grids with more than the given number of PCU."),
        ConditionDescriptor::new("hasgridtype", has_grid_type)
            .with_help("Finds grids with the specified grid type (large | small | ship | static)."),
        ConditionDescriptor::new("hasownertype", has_owner_type)
            .with_help("Finds grids with the specified owner type (npc | player | nobody)."),
        ConditionDescriptor::new("ownedby", owned_by).with_help(
            "Finds grids owned by the given player. Accepts a name, an identity id, or 'nobody'.",
        ),
        ConditionDescriptor::unary("haspower", has_power)
            .with_invert("nopower")
            .with_help("Finds grids with, or without power."),
        ConditionDescriptor::unary(OCCUPANCY_COMMAND, piloted)
            .with_help("Finds grids with pilots."),
        ConditionDescriptor::new("hastype", has_block_type)
            .with_invert("notype")
            .with_help("Finds grids containing blocks of the given type."),
        ConditionDescriptor::new("hassubtype", has_block_subtype)
            .with_invert("nosubtype")
            .with_help("Finds grids containing blocks of the given subtype."),
        ConditionDescriptor::new("centerdistancelessthan", center_distance_less_than)
            .with_invert("centerdistancegreaterthan")
            .with_help("Finds grids closer to, or further from, the world center than the given distance."),
    ]
}

fn int_param(parameter: &str) -> Option<i64> {
    parameter.trim().parse().ok()
}

fn float_param(parameter: &str) -> Option<f64> {
    parameter.trim().parse().ok()
}

fn name_contains(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    if grid.name.is_empty() {
        return MatchOutcome::NoMatch;
    }
    let haystack = grid.name.to_lowercase();
    MatchOutcome::from_bool(haystack.contains(&parameter.to_lowercase()))
}

fn blocks_less_than(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    match int_param(parameter) {
        Some(count) => MatchOutcome::from_bool((grid.block_count as i64) < count),
        None => MatchOutcome::Indeterminate,
    }
}

fn blocks_greater_than(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    match int_param(parameter) {
        Some(count) => MatchOutcome::from_bool((grid.block_count as i64) > count),
        None => MatchOutcome::Indeterminate,
    }
}

fn pcu_less_than(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    match int_param(parameter) {
        Some(pcu) => MatchOutcome::from_bool(i64::from(grid.pcu) < pcu),
        None => MatchOutcome::Indeterminate,
    }
}

fn pcu_greater_than(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    match int_param(parameter) {
        Some(pcu) => MatchOutcome::from_bool(i64::from(grid.pcu) > pcu),
        None => MatchOutcome::Indeterminate,
    }
}

fn has_grid_type(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    match parameter.trim().to_lowercase().as_str() {
        "static" => MatchOutcome::from_bool(grid.is_static),
        "ship" => MatchOutcome::from_bool(!grid.is_static),
        "large" => MatchOutcome::from_bool(grid.size_class == SizeClass::Large),
        "small" => MatchOutcome::from_bool(grid.size_class == SizeClass::Small),
        _ => MatchOutcome::NoMatch,
    }
}

fn has_owner_type(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    match parameter.trim().to_lowercase().as_str() {
        "npc" | "npcs" => MatchOutcome::from_bool(matches!(grid.owner, Ownership::Npc(_))),
        "player" | "players" => MatchOutcome::from_bool(matches!(grid.owner, Ownership::Player(_))),
        "nobody" => MatchOutcome::from_bool(grid.owner == Ownership::Nobody),
        _ => MatchOutcome::NoMatch,
    }
}

fn owned_by(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    let parameter = parameter.trim();
    if parameter.eq_ignore_ascii_case("nobody") {
        return MatchOutcome::from_bool(grid.owner == Ownership::Nobody);
    }
    if let Ok(identity) = parameter.parse::<u64>() {
        return MatchOutcome::from_bool(grid.owner.identity() == Some(identity));
    }
    match &grid.owner_name {
        Some(owner) => MatchOutcome::from_bool(owner.eq_ignore_ascii_case(parameter)),
        None => MatchOutcome::NoMatch,
    }
}

fn has_power(grid: &GridSnapshot) -> MatchOutcome {
    MatchOutcome::from_bool(grid.powered)
}

fn piloted(grid: &GridSnapshot) -> MatchOutcome {
    MatchOutcome::from_bool(grid.pilot_count > 0)
}

fn has_block_type(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    MatchOutcome::from_bool(
        grid.block_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(parameter)),
    )
}

fn has_block_subtype(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    MatchOutcome::from_bool(
        grid.block_subtypes
            .iter()
            .any(|t| t.eq_ignore_ascii_case(parameter)),
    )
}

fn center_distance_less_than(grid: &GridSnapshot, parameter: &str) -> MatchOutcome {
    match float_param(parameter) {
        Some(distance) => {
            MatchOutcome::from_bool(grid.position.length_squared() < distance * distance)
        }
        None => MatchOutcome::Indeterminate,
    }
}

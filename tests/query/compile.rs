//! Query compilation integration tests

use gridscan_conditions::stdlib::{self, OCCUPANCY_COMMAND};
use gridscan_conditions::ConditionRegistry;
use gridscan_foundation::ErrorKind;
use gridscan_query::QueryCompiler;

fn registry() -> ConditionRegistry {
    ConditionRegistry::with_modules([stdlib::conditions()])
}

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}

// =============================================================================
// Token Binding
// =============================================================================

#[test]
fn mixed_query_binds_parameters_by_lookahead() {
    let query = QueryCompiler::compile(
        &tokens(&["haspower", "blockslessthan", "200", "hasgridtype", "ship"]),
        &registry(),
    )
    .unwrap();

    // Three explicit conditions plus the implicit occupancy default.
    assert_eq!(query.len(), 4);
    assert_eq!(query.conditions()[0].command(), "haspower");
    assert_eq!(query.conditions()[0].parameter(), "");
    assert_eq!(query.conditions()[1].command(), "blockslessthan");
    assert_eq!(query.conditions()[1].parameter(), "200");
    assert_eq!(query.conditions()[2].command(), "hasgridtype");
    assert_eq!(query.conditions()[2].parameter(), "ship");
    assert_eq!(query.conditions()[3].command(), OCCUPANCY_COMMAND);
    assert!(query.conditions()[3].is_inverted());
}

#[test]
fn parameters_keep_their_original_case() {
    let query =
        QueryCompiler::compile(&tokens(&["ownedby", "Rico"]), &registry()).unwrap();
    assert_eq!(query.conditions()[0].parameter(), "Rico");
}

#[test]
fn trailing_command_without_parameter_compiles() {
    let query = QueryCompiler::compile(&tokens(&["pculessthan"]), &registry()).unwrap();
    assert_eq!(query.conditions()[0].command(), "pculessthan");
    assert_eq!(query.conditions()[0].parameter(), "");
}

// =============================================================================
// Failure and Defaults
// =============================================================================

#[test]
fn unknown_token_names_the_offender() {
    let err = QueryCompiler::compile(
        &tokens(&["haspower", "blockslessthan", "200", "gibberish"]),
        &registry(),
    )
    .unwrap_err();
    match err.kind {
        ErrorKind::UnknownToken(ref token) => assert_eq!(token, "gibberish"),
        other => panic!("expected UnknownToken, got {other:?}"),
    }
    assert_eq!(err.to_string(), "unknown argument 'gibberish'");
}

#[test]
fn occupancy_default_suppressed_by_either_spelling() {
    for word in ["haspilot", "HASPILOT", "HasPilot"] {
        let query = QueryCompiler::compile(&tokens(&[word]), &registry()).unwrap();
        assert_eq!(query.len(), 1, "spelling {word:?} must suppress the default");
    }
}

#[test]
fn every_standard_inverse_name_compiles_inverted() {
    let registry = registry();
    for descriptor in registry.descriptors() {
        let Some(inverse) = &descriptor.invert_command else {
            continue;
        };
        let query = QueryCompiler::compile(&tokens(&[inverse.as_str()]), &registry).unwrap();
        assert_eq!(query.conditions()[0].command(), descriptor.command);
        assert!(query.conditions()[0].is_inverted());
    }
}

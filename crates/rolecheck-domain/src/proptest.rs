//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Lenient mode never failing with an error
//! - Wildcard resources deciding both modes
//! - Policy name constraints

use crate::checks::{self, MAX_NAME_LEN};
use crate::engine::{validate, validate_lenient, validate_robust};
use crate::error::{NameViolation, ValidationError};
use crate::policy::Mode;
use crate::test_support::{policy, statement};
use proptest::prelude::*;
use rolecheck_model::{PolicyDocument, RolePolicy, Statement};
use serde_json::json;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Resource strings that are never the bare wildcard.
fn arb_scoped_resource() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("arn:aws:[a-z0-9]{1,8}:::[a-z0-9/*-]{1,20}").unwrap(),
        prop::string::string_regex("[a-z]{1,10}:[a-z]{1,10}").unwrap(),
        Just("**".to_string()),
    ]
}

fn arb_resources() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_scoped_resource(), 0..5)
}

/// Optional string fields drawn from both valid and invalid values.
fn arb_opt_string() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("Allow".to_string()),
        Just("Deny".to_string()),
        Just("2012-10-17".to_string()),
        Just("*".to_string()),
        ".{0,16}",
    ])
}

fn arb_opt_list() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec(
        prop_oneof![Just("*".to_string()), ".{0,12}"],
        0..4,
    ))
}

/// Fully arbitrary statements, including every kind of absence.
fn arb_statement() -> impl Strategy<Value = Statement> {
    (
        arb_opt_string(),
        arb_opt_string(),
        prop::option::of(prop_oneof![Just(json!({})), Just(json!("*"))]),
        arb_opt_list(),
        arb_opt_list(),
    )
        .prop_map(|(sid, effect, principal, action, resource)| Statement {
            sid,
            effect,
            principal,
            action,
            resource,
        })
}

fn arb_role_policy() -> impl Strategy<Value = Option<RolePolicy>> {
    prop::option::of(
        (
            arb_opt_string(),
            prop::option::of((
                arb_opt_string(),
                prop::option::of(prop::collection::vec(arb_statement(), 0..4)),
            )),
        )
            .prop_map(|(policy_name, document)| RolePolicy {
                policy_name,
                policy_document: document.map(|(version, statement)| PolicyDocument {
                    version,
                    statement,
                }),
            }),
    )
}

/// Names made only of the allowed character set, within bounds.
fn arb_valid_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9+=,.@_-]{1,128}").unwrap()
}

// ============================================================================
// Property tests: mode behavior
// ============================================================================

proptest! {
    /// Lenient mode folds every failure into `false`.
    #[test]
    fn lenient_never_errors(p in arb_role_policy()) {
        prop_assert!(validate(p.as_ref(), Mode::Lenient).is_ok());
    }

    /// Lenient mode is exactly: statements present, every resource present and wildcard-free.
    #[test]
    fn lenient_matches_resource_rule(p in arb_role_policy()) {
        let expected = p
            .as_ref()
            .and_then(RolePolicy::statements)
            .is_some_and(|list| {
                list.iter().all(|st| {
                    st.resource
                        .as_ref()
                        .is_some_and(|r| !r.iter().any(|x| x == "*"))
                })
            });
        prop_assert_eq!(validate_lenient(p.as_ref()), expected);
    }

    /// Robust `Ok(true)` implies lenient `true`.
    #[test]
    fn robust_pass_implies_lenient_pass(p in arb_role_policy()) {
        if validate_robust(p.as_ref()) == Ok(true) {
            prop_assert!(validate_lenient(p.as_ref()));
        }
    }

    /// Well-formed policies pass both modes unless a wildcard is added.
    #[test]
    fn wildcard_decides_well_formed_policies(
        resources in prop::collection::vec(arb_resources(), 1..4),
        wildcard_at in prop::option::of(0usize..4),
    ) {
        let mut statements: Vec<Statement> = resources
            .iter()
            .map(|r| {
                let refs: Vec<&str> = r.iter().map(String::as_str).collect();
                statement("Allow", &["s3:GetObject"], &refs)
            })
            .collect();

        let has_wildcard = match wildcard_at {
            Some(i) if i < statements.len() => {
                statements[i]
                    .resource
                    .get_or_insert_with(Vec::new)
                    .push("*".to_string());
                true
            }
            _ => false,
        };

        let p = policy("root", "2012-10-17", statements);
        prop_assert_eq!(validate_lenient(Some(&p)), !has_wildcard);
        prop_assert_eq!(validate_robust(Some(&p)), Ok(!has_wildcard));
    }
}

// ============================================================================
// Property tests: policy name
// ============================================================================

proptest! {
    #[test]
    fn valid_names_pass(name in arb_valid_name()) {
        prop_assert_eq!(checks::policy_name(Some(name.as_str())), Ok(true));
    }

    #[test]
    fn long_names_fail_on_length(extra in 1usize..64) {
        let name = "n".repeat(MAX_NAME_LEN + extra);
        prop_assert_eq!(
            checks::policy_name(Some(name.as_str())),
            Err(ValidationError::PolicyNameInvalid(NameViolation::TooLong))
        );
    }

    #[test]
    fn names_with_forbidden_characters_fail_on_format(
        prefix in "[a-z]{0,5}",
        bad in prop_oneof![Just(' '), Just('/'), Just('#'), Just('*'), Just('é')],
        suffix in "[a-z]{0,5}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        prop_assert_eq!(
            checks::policy_name(Some(name.as_str())),
            Err(ValidationError::PolicyNameInvalid(NameViolation::BadFormat))
        );
    }
}

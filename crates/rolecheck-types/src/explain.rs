//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after policy examples.
    pub examples: ExamplePair,
}

/// Before and after policy examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Policy that would trigger the outcome.
    pub before: &'static str,
    /// Policy that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Check IDs
        ids::CHECK_POLICY_PRESENT => Some(explain_policy_present()),
        ids::CHECK_POLICY_NAME => Some(explain_policy_name()),
        ids::CHECK_DOCUMENT_PRESENT => Some(explain_document_present()),
        ids::CHECK_DOCUMENT_VERSION => Some(explain_document_version()),
        ids::CHECK_DOCUMENT_STATEMENT => Some(explain_document_statement()),
        ids::CHECK_STATEMENT_EFFECT => Some(explain_statement_effect()),
        ids::CHECK_STATEMENT_PRINCIPAL => Some(explain_statement_principal()),
        ids::CHECK_STATEMENT_ACTION => Some(explain_statement_action()),
        ids::CHECK_STATEMENT_RESOURCE => Some(explain_statement_resource()),
        ids::CHECK_INPUT_PARSE => Some(explain_input_parse()),

        // Codes
        ids::CODE_ROLE_POLICY_MISSING => Some(explain_policy_present()),
        ids::CODE_POLICY_NAME_MISSING => Some(titled(explain_policy_name(), "Policy Name Missing")),
        ids::CODE_POLICY_NAME_FORMAT => {
            Some(titled(explain_policy_name(), "Policy Name Has Wrong Format"))
        }
        ids::CODE_POLICY_NAME_TOO_SHORT => {
            Some(titled(explain_policy_name(), "Policy Name Too Short"))
        }
        ids::CODE_POLICY_NAME_TOO_LONG => Some(titled(explain_policy_name(), "Policy Name Too Long")),
        ids::CODE_POLICY_DOCUMENT_MISSING => Some(explain_document_present()),
        ids::CODE_VERSION_MISSING => Some(titled(explain_document_version(), "Version Missing")),
        ids::CODE_VERSION_UNSUPPORTED => {
            Some(titled(explain_document_version(), "Unsupported Version"))
        }
        ids::CODE_STATEMENT_MISSING => Some(explain_document_statement()),
        ids::CODE_EFFECT_MISSING => Some(titled(explain_statement_effect(), "Effect Missing")),
        ids::CODE_EFFECT_INVALID => Some(titled(explain_statement_effect(), "Effect Not Allowed")),
        ids::CODE_PRINCIPAL_NOT_ALLOWED => Some(explain_statement_principal()),
        ids::CODE_ACTION_MISSING => Some(explain_statement_action()),
        ids::CODE_RESOURCE_MISSING => {
            Some(titled(explain_statement_resource(), "Resource Missing"))
        }
        ids::CODE_WILDCARD_RESOURCE => Some(explain_wildcard_resource()),
        ids::CODE_MALFORMED_FIELD => Some(explain_malformed_field()),
        ids::CODE_INVALID_JSON => Some(titled(explain_input_parse(), "Invalid JSON")),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_POLICY_PRESENT,
        ids::CHECK_POLICY_NAME,
        ids::CHECK_DOCUMENT_PRESENT,
        ids::CHECK_DOCUMENT_VERSION,
        ids::CHECK_DOCUMENT_STATEMENT,
        ids::CHECK_STATEMENT_EFFECT,
        ids::CHECK_STATEMENT_PRINCIPAL,
        ids::CHECK_STATEMENT_ACTION,
        ids::CHECK_STATEMENT_RESOURCE,
        ids::CHECK_INPUT_PARSE,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_ROLE_POLICY_MISSING,
        ids::CODE_POLICY_NAME_MISSING,
        ids::CODE_POLICY_NAME_FORMAT,
        ids::CODE_POLICY_NAME_TOO_SHORT,
        ids::CODE_POLICY_NAME_TOO_LONG,
        ids::CODE_POLICY_DOCUMENT_MISSING,
        ids::CODE_VERSION_MISSING,
        ids::CODE_VERSION_UNSUPPORTED,
        ids::CODE_STATEMENT_MISSING,
        ids::CODE_EFFECT_MISSING,
        ids::CODE_EFFECT_INVALID,
        ids::CODE_PRINCIPAL_NOT_ALLOWED,
        ids::CODE_ACTION_MISSING,
        ids::CODE_RESOURCE_MISSING,
        ids::CODE_WILDCARD_RESOURCE,
        ids::CODE_MALFORMED_FIELD,
        ids::CODE_INVALID_JSON,
    ]
}

fn titled(mut exp: Explanation, title: &'static str) -> Explanation {
    exp.title = title;
    exp
}

// --- Check-level explanations ---

fn explain_policy_present() -> Explanation {
    Explanation {
        title: "Role Policy Present",
        description: "\
Requires the input to contain a role policy object.

A document consisting of JSON `null` (or a `null` entry inside a batch file)
parses successfully but carries no policy to validate.",
        remediation: "\
Replace the `null` value with a role policy object that has a `PolicyName`
and a `PolicyDocument`.",
        examples: ExamplePair {
            before: "null",
            after: r#"{
  "PolicyName": "root",
  "PolicyDocument": {
    "Version": "2012-10-17",
    "Statement": [
      { "Effect": "Allow", "Action": "iam:ListRoles", "Resource": "arn:aws:iam::123456789012:role/*" }
    ]
  }
}"#,
        },
    }
}

fn explain_policy_name() -> Explanation {
    Explanation {
        title: "Policy Name",
        description: "\
Validates the `PolicyName` field of the role policy.

The name must:
- be present
- consist only of letters, digits and the characters `+=,.@_-`
- be between 1 and 128 characters long

The format is checked before the length, so an empty name is reported as
having the wrong format.",
        remediation: "\
Give the policy a short name built from the allowed character set. Replace
spaces and other punctuation with `-` or `_`.",
        examples: ExamplePair {
            before: r#"{ "PolicyName": "my root policy", "PolicyDocument": { ... } }"#,
            after: r#"{ "PolicyName": "my-root-policy", "PolicyDocument": { ... } }"#,
        },
    }
}

fn explain_document_present() -> Explanation {
    Explanation {
        title: "Policy Document Present",
        description: "\
Requires the role policy to carry a `PolicyDocument` object.

Without a document there is no version and no statement to validate.",
        remediation: "Add a `PolicyDocument` object with `Version` and `Statement` fields.",
        examples: ExamplePair {
            before: r#"{ "PolicyName": "root" }"#,
            after: r#"{
  "PolicyName": "root",
  "PolicyDocument": { "Version": "2012-10-17", "Statement": [ ... ] }
}"#,
        },
    }
}

fn explain_document_version() -> Explanation {
    Explanation {
        title: "Policy Language Version",
        description: "\
Requires `PolicyDocument.Version` to name a supported policy language version.

Only the two published versions are accepted:
- `2012-10-17` (current)
- `2008-10-17` (legacy)

Any other value, including plausible-looking dates, is rejected.",
        remediation: "Set `Version` to `2012-10-17`.",
        examples: ExamplePair {
            before: r#""PolicyDocument": { "Version": "2021-10-17", "Statement": [ ... ] }"#,
            after: r#""PolicyDocument": { "Version": "2012-10-17", "Statement": [ ... ] }"#,
        },
    }
}

fn explain_document_statement() -> Explanation {
    Explanation {
        title: "Statement List Present",
        description: "\
Requires `PolicyDocument.Statement` to be present.

Each statement in the list is then validated in order; the first failing
statement ends validation.",
        remediation: "Add a `Statement` array with at least one statement.",
        examples: ExamplePair {
            before: r#""PolicyDocument": { "Version": "2012-10-17" }"#,
            after: r#""PolicyDocument": {
  "Version": "2012-10-17",
  "Statement": [ { "Effect": "Allow", "Action": "s3:GetObject", "Resource": "arn:aws:s3:::bucket/key" } ]
}"#,
        },
    }
}

fn explain_statement_effect() -> Explanation {
    Explanation {
        title: "Statement Effect",
        description: "\
Requires every statement to declare an `Effect` of exactly `Allow` or `Deny`.

The comparison is case-sensitive: `allow` is rejected.",
        remediation: "Set `Effect` to `Allow` or `Deny`.",
        examples: ExamplePair {
            before: r#"{ "Effect": "Boom", "Action": "s3:GetObject", "Resource": "arn:aws:s3:::bucket/key" }"#,
            after: r#"{ "Effect": "Allow", "Action": "s3:GetObject", "Resource": "arn:aws:s3:::bucket/key" }"#,
        },
    }
}

fn explain_statement_principal() -> Explanation {
    Explanation {
        title: "No Principal In Role Policy",
        description: "\
Rejects statements that declare a `Principal`.

Inline and attached role policies apply to the identity they are attached to;
a principal only makes sense in resource-based and trust policies. Any
non-null value is rejected, including an empty object.",
        remediation: "Remove the `Principal` field from the statement.",
        examples: ExamplePair {
            before: r#"{ "Effect": "Allow", "Principal": { "AWS": "*" }, "Action": "sts:AssumeRole", "Resource": "arn:aws:iam::123456789012:role/app" }"#,
            after: r#"{ "Effect": "Allow", "Action": "sts:AssumeRole", "Resource": "arn:aws:iam::123456789012:role/app" }"#,
        },
    }
}

fn explain_statement_action() -> Explanation {
    Explanation {
        title: "Statement Action",
        description: "\
Requires every statement to name at least one `Action`.

`Action` may be a single string or a list of strings; an empty list is
rejected.",
        remediation: "List the actions the statement grants or denies.",
        examples: ExamplePair {
            before: r#"{ "Effect": "Allow", "Action": [], "Resource": "arn:aws:s3:::bucket/key" }"#,
            after: r#"{ "Effect": "Allow", "Action": ["s3:GetObject"], "Resource": "arn:aws:s3:::bucket/key" }"#,
        },
    }
}

fn explain_statement_resource() -> Explanation {
    Explanation {
        title: "Statement Resource",
        description: "\
Requires every statement to name its `Resource` and flags unrestricted scope.

`Resource` may be a single string or a list of strings. A missing resource is
a schema violation. A resource equal to the literal `*` is valid IAM but is
reported as a failed validation (`false`) because it grants access to every
resource.

Only the exact string `*` is treated as a wildcard; patterns such as
`arn:aws:s3:::*` are accepted.",
        remediation: "\
Name the resources explicitly. Use ARNs scoped to the account, region and
resource the statement needs.",
        examples: ExamplePair {
            before: r#"{ "Effect": "Allow", "Action": "s3:GetObject", "Resource": "*" }"#,
            after: r#"{ "Effect": "Allow", "Action": "s3:GetObject", "Resource": "arn:aws:s3:::reports/*" }"#,
        },
    }
}

fn explain_input_parse() -> Explanation {
    Explanation {
        title: "Input Parsing",
        description: "\
The input file must be valid JSON holding either one role policy object or an
array of role policy objects.",
        remediation: "\
Fix the JSON syntax, or pass `--input single` / `--input many` to state the
expected shape explicitly.",
        examples: ExamplePair {
            before: r#"{ "PolicyName": "root", "PolicyDocument": { "Version": "2012-10-17", }"#,
            after: r#"{ "PolicyName": "root", "PolicyDocument": { "Version": "2012-10-17", "Statement": [] } }"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_wildcard_resource() -> Explanation {
    let mut exp = explain_statement_resource();
    exp.title = "Wildcard Resource";
    exp
}

fn explain_malformed_field() -> Explanation {
    Explanation {
        title: "Malformed Action or Resource",
        description: "\
`Action` and `Resource` must each be a string, a list of strings, or absent.

Numbers, booleans, objects, and lists containing non-string values cannot be
read and the policy is rejected before validation.",
        remediation: "Quote the value, or wrap several values in a list of strings.",
        examples: ExamplePair {
            before: r#"{ "Effect": "Allow", "Action": 5, "Resource": { "arn": "x" } }"#,
            after: r#"{ "Effect": "Allow", "Action": "s3:GetObject", "Resource": ["arn:aws:s3:::bucket/key"] }"#,
        },
    }
}

//! Fuzz target for validation over structurally valid policies.
//!
//! Builds role policy JSON from structured input so the fuzzer spends its time inside the
//! validation engine instead of the JSON tokenizer.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_validation
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::{Value, json};

#[derive(Arbitrary, Debug)]
enum StringField {
    Absent,
    Null,
    Known(u8),
    Text(String),
}

#[derive(Arbitrary, Debug)]
enum ListField {
    Absent,
    One(String),
    Many(Vec<String>),
    Number(i64),
}

#[derive(Arbitrary, Debug)]
struct StatementInput {
    effect: StringField,
    principal: bool,
    action: ListField,
    resource: ListField,
}

#[derive(Arbitrary, Debug)]
struct PolicyInput {
    name: StringField,
    version: StringField,
    statements: Option<Vec<StatementInput>>,
}

const KNOWN: &[&str] = &["Allow", "Deny", "2012-10-17", "2008-10-17", "*", "root", ""];

fn string_value(field: &StringField) -> Option<Value> {
    match field {
        StringField::Absent => None,
        StringField::Null => Some(Value::Null),
        StringField::Known(i) => Some(json!(KNOWN[usize::from(*i) % KNOWN.len()])),
        StringField::Text(s) => Some(json!(s)),
    }
}

fn list_value(field: &ListField) -> Option<Value> {
    match field {
        ListField::Absent => None,
        ListField::One(s) => Some(json!(s)),
        ListField::Many(v) => Some(json!(v)),
        ListField::Number(n) => Some(json!(n)),
    }
}

fn insert(obj: &mut serde_json::Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        obj.insert(key.to_string(), value);
    }
}

fn build(input: &PolicyInput) -> Value {
    let mut doc = serde_json::Map::new();
    insert(&mut doc, "Version", string_value(&input.version));
    if let Some(statements) = &input.statements {
        let list: Vec<Value> = statements
            .iter()
            .map(|st| {
                let mut obj = serde_json::Map::new();
                insert(&mut obj, "Effect", string_value(&st.effect));
                if st.principal {
                    obj.insert("Principal".to_string(), json!({ "AWS": "*" }));
                }
                insert(&mut obj, "Action", list_value(&st.action));
                insert(&mut obj, "Resource", list_value(&st.resource));
                Value::Object(obj)
            })
            .collect();
        doc.insert("Statement".to_string(), Value::Array(list));
    }

    let mut policy = serde_json::Map::new();
    insert(&mut policy, "PolicyName", string_value(&input.name));
    policy.insert("PolicyDocument".to_string(), Value::Object(doc));
    Value::Object(policy)
}

fuzz_target!(|input: PolicyInput| {
    if input.statements.as_ref().is_some_and(|s| s.len() > 32) {
        return;
    }

    // Malformed Action/Resource shapes are parse errors, which are fine.
    if let Ok(policy) = rolecheck_model::from_value(build(&input)) {
        let _ = rolecheck_domain::validate_lenient(policy.as_ref());
        let _ = rolecheck_domain::validate_robust(policy.as_ref());
    }
});

use rolecheck_model::{PolicyDocument, RolePolicy, Statement};

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn statement(effect: &str, action: &[&str], resource: &[&str]) -> Statement {
    Statement {
        sid: None,
        effect: Some(effect.to_string()),
        principal: None,
        action: Some(strings(action)),
        resource: Some(strings(resource)),
    }
}

pub fn policy(name: &str, version: &str, statements: Vec<Statement>) -> RolePolicy {
    RolePolicy {
        policy_name: Some(name.to_string()),
        policy_document: Some(PolicyDocument {
            version: Some(version.to_string()),
            statement: Some(statements),
        }),
    }
}

/// The canonical passing policy: one `Allow` statement with a scoped resource.
pub fn valid_policy() -> RolePolicy {
    policy(
        "root",
        "2012-10-17",
        vec![statement(
            "Allow",
            &["iam:ListRoles", "iam:ListUsers"],
            &["test:resource"],
        )],
    )
}

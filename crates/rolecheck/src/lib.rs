//! Validate AWS IAM inline role policy documents.
//!
//! ```
//! use rolecheck::{Mode, parse_one, validate};
//!
//! let policy = parse_one(
//!     r#"{
//!         "PolicyName": "root",
//!         "PolicyDocument": {
//!             "Version": "2012-10-17",
//!             "Statement": [
//!                 { "Effect": "Allow", "Action": ["iam:ListRoles"], "Resource": "test:resource" }
//!             ]
//!         }
//!     }"#,
//! )?;
//! assert_eq!(validate(policy.as_ref(), Mode::Robust), Ok(true));
//! # Ok::<(), rolecheck::ParseError>(())
//! ```

#![forbid(unsafe_code)]

pub use rolecheck_domain::{
    Mode, NameViolation, ValidationError, checks, validate, validate_lenient, validate_robust,
};
pub use rolecheck_model::{
    Field, MalformedFieldError, ParseError, ParsedInput, PolicyDocument, RolePolicy, Statement,
    from_value, many_from_value, parse_any, parse_many, parse_one,
};

//! Fuzz target for role policy JSON parsing and validation.
//!
//! Goal: parsing and both validation modes should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use rolecheck_domain::{validate_lenient, validate_robust};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(parsed) = rolecheck_model::parse_any(text) {
        for policy in parsed.into_policies() {
            let lenient = validate_lenient(policy.as_ref());
            // A robust pass is never a lenient failure.
            if validate_robust(policy.as_ref()) == Ok(true) {
                assert!(lenient);
            }
        }
    }
});

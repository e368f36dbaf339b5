//! Fuzz target for plan JSON extraction.
//!
//! Goal: extraction should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_plan_extract
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use tagguard_types::SrcPath;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = tagguard_extract::extract_plan_json(&SrcPath::new("fuzz-plan.json"), text);
    }
});

//! Fuzz target for `.tf` source extraction.
//!
//! Goal: extraction should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_hcl_extract
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use tagguard_types::SrcPath;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (HCL source must be UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = tagguard_extract::extract_source(&SrcPath::new("fuzz.tf"), text);
    }
});
